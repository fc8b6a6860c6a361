//! Console API implementation.
//!
//! `console.log`, `console.warn` and `console.error` render their arguments
//! into the console panel instead of writing to stdout.

use crate::inspect::{BoaInspector, InspectHelpers};
use boa_engine::{
    Context, JsResult, JsValue, NativeFunction,
    js_string,
    object::ObjectInitializer,
    property::Attribute,
};
use boa_gc::{Finalize, Trace};
use devtools::render::{render, RenderOptions};
use devtools::{Category, SharedPanel};

/// State captured by every console method.
#[derive(Clone, Trace, Finalize)]
struct ConsoleBinding {
    helpers: InspectHelpers,
    #[unsafe_ignore_trace]
    panel: SharedPanel,
    #[unsafe_ignore_trace]
    options: RenderOptions,
}

impl ConsoleBinding {
    fn render(&self, category: Category, args: &[JsValue], context: &mut Context) {
        let mut inspector = BoaInspector::new(context, &self.helpers);
        render(&mut inspector, &self.panel, category, args, None, &self.options);
    }
}

/// Register the console API on the global object.
pub fn register_console(
    context: &mut Context,
    helpers: InspectHelpers,
    panel: SharedPanel,
    options: RenderOptions,
) -> JsResult<()> {
    let binding = ConsoleBinding {
        helpers,
        panel,
        options,
    };

    let console = ObjectInitializer::new(context)
        .function(
            NativeFunction::from_copy_closure_with_captures(console_log, binding.clone()),
            js_string!("log"),
            0,
        )
        .function(
            NativeFunction::from_copy_closure_with_captures(console_warn, binding.clone()),
            js_string!("warn"),
            0,
        )
        .function(
            NativeFunction::from_copy_closure_with_captures(console_error, binding),
            js_string!("error"),
            0,
        )
        .build();

    context.register_global_property(js_string!("console"), console, Attribute::all())
}

/// console.log()
fn console_log(
    _: &JsValue,
    args: &[JsValue],
    binding: &ConsoleBinding,
    context: &mut Context,
) -> JsResult<JsValue> {
    binding.render(Category::Log, args, context);
    Ok(JsValue::undefined())
}

/// console.warn()
fn console_warn(
    _: &JsValue,
    args: &[JsValue],
    binding: &ConsoleBinding,
    context: &mut Context,
) -> JsResult<JsValue> {
    binding.render(Category::Warn, args, context);
    Ok(JsValue::undefined())
}

/// console.error()
fn console_error(
    _: &JsValue,
    args: &[JsValue],
    binding: &ConsoleBinding,
    context: &mut Context,
) -> JsResult<JsValue> {
    binding.render(Category::Error, args, context);
    Ok(JsValue::undefined())
}
