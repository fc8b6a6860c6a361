//! Value inspection for the console renderer.

use boa_engine::{js_string, Context, JsError, JsNativeError, JsObject, JsResult, JsValue, Source};
use boa_gc::{Finalize, Trace};
use devtools::{ValueInspector, ValueKind};

/// Copies every enumerable property, own or inherited, onto a plain object.
const SNAPSHOT_SOURCE: &str =
    "(function (obj) { var result = {}; for (var key in obj) result[key] = obj[key]; return result; })";

/// Functions the inspector calls into, captured once per context so that
/// page scripts replacing `JSON` do not change rendering.
#[derive(Clone, Trace, Finalize)]
pub struct InspectHelpers {
    stringify: JsObject,
    snapshot: JsObject,
}

impl InspectHelpers {
    /// Look up `JSON.stringify` and compile the snapshot helper.
    pub fn install(context: &mut Context) -> JsResult<Self> {
        let stringify = eval_function(context, "JSON.stringify")?;
        let snapshot = eval_function(context, SNAPSHOT_SOURCE)?;
        Ok(Self {
            stringify,
            snapshot,
        })
    }
}

fn eval_function(context: &mut Context, source: &str) -> JsResult<JsObject> {
    let value = context.eval(Source::from_bytes(source.as_bytes()))?;
    match value.as_object() {
        Some(object) if object.is_callable() => Ok(object.clone()),
        _ => Err(JsNativeError::typ()
            .with_message("console helper is not a function")
            .into()),
    }
}

/// [`ValueInspector`] over a Boa context.
pub struct BoaInspector<'a> {
    context: &'a mut Context,
    helpers: &'a InspectHelpers,
}

impl<'a> BoaInspector<'a> {
    pub fn new(context: &'a mut Context, helpers: &'a InspectHelpers) -> Self {
        Self { context, helpers }
    }
}

impl ValueInspector for BoaInspector<'_> {
    type Value = JsValue;

    fn inspect(&mut self, value: &JsValue) -> ValueKind {
        match value {
            JsValue::Null => ValueKind::Null,
            // Lossy so each lone surrogate stays a single code unit.
            JsValue::String(text) => ValueKind::String(String::from_utf16_lossy(&text.to_vec())),
            JsValue::Object(object) if object.is_callable() => {
                let source = value
                    .to_string(self.context)
                    .map(|s| s.to_std_string_escaped())
                    .unwrap_or_else(|e| format_js_error(&e, self.context));
                ValueKind::Function(source)
            }
            JsValue::Object(object) if !object.is_array() => ValueKind::PlainObject,
            _ => ValueKind::Other,
        }
    }

    fn snapshot(&mut self, value: &JsValue) -> Result<JsValue, String> {
        self.helpers
            .snapshot
            .call(&JsValue::undefined(), &[value.clone()], self.context)
            .map_err(|e| format_js_error(&e, self.context))
    }

    fn stringify(&mut self, value: &JsValue, indent: usize) -> Result<Option<String>, String> {
        // JSON.stringify clamps the indent at 10 anyway.
        let indent = i32::try_from(indent).unwrap_or(10);
        let result = self
            .helpers
            .stringify
            .call(
                &JsValue::undefined(),
                &[value.clone(), JsValue::null(), JsValue::from(indent)],
                self.context,
            )
            .map_err(|e| format_js_error(&e, self.context))?;

        Ok(result.as_string().map(|s| s.to_std_string_escaped()))
    }
}

/// Message of a thrown value: the native error message, the `message`
/// property of a thrown object, or a thrown primitive converted to a string.
pub fn format_js_error(error: &JsError, context: &mut Context) -> String {
    if let Ok(native) = error.try_native(context) {
        return native.message().to_string();
    }
    let thrown = error.to_opaque(context);
    let message = match thrown.as_object() {
        Some(object) => object.get(js_string!("message"), context),
        None => Ok(thrown.clone()),
    };
    message
        .and_then(|value| value.to_string(context))
        .map(|s| s.to_std_string_escaped())
        .unwrap_or_else(|_| "Unknown error".to_string())
}
