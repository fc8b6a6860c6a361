//! Scripted host used by the unit tests.

use crate::executor::{EvalError, Evaluator};
use crate::panel::{ConsolePanel, SharedPanel};
use crate::render::{ValueInspector, ValueKind};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum FakeValue {
    Null,
    Undefined,
    Number(i64),
    Str(String),
    Function(String),
    Array(Vec<FakeValue>),
    Object(Vec<(String, FakeValue)>),
    /// Serializing this value always fails.
    Cyclic,
    /// Taking a snapshot of this value always fails.
    Throwing,
}

/// Host that answers evaluations from a table of known sources.
#[derive(Default)]
pub struct FakeHost {
    results: HashMap<String, Result<FakeValue, String>>,
    pub evaluated: Vec<String>,
    pub snapshots: usize,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(mut self, source: &str, value: FakeValue) -> Self {
        self.results.insert(source.to_string(), Ok(value));
        self
    }

    pub fn with_failure(mut self, source: &str, message: &str) -> Self {
        self.results
            .insert(source.to_string(), Err(message.to_string()));
        self
    }
}

impl Evaluator for FakeHost {
    fn evaluate(&mut self, source: &str) -> Result<FakeValue, EvalError> {
        self.evaluated.push(source.to_string());
        match self.results.get(source) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(EvalError::new(message.clone())),
            None => Err(EvalError::new(format!("Unexpected source: {}", source))),
        }
    }
}

impl ValueInspector for FakeHost {
    type Value = FakeValue;

    fn inspect(&mut self, value: &FakeValue) -> ValueKind {
        match value {
            FakeValue::Null => ValueKind::Null,
            FakeValue::Str(text) => ValueKind::String(text.clone()),
            FakeValue::Function(source) => ValueKind::Function(source.clone()),
            FakeValue::Object(_) | FakeValue::Cyclic | FakeValue::Throwing => {
                ValueKind::PlainObject
            }
            _ => ValueKind::Other,
        }
    }

    fn snapshot(&mut self, value: &FakeValue) -> Result<FakeValue, String> {
        self.snapshots += 1;
        match value {
            FakeValue::Throwing => Err("getter <failed>".to_string()),
            _ => Ok(value.clone()),
        }
    }

    fn stringify(&mut self, value: &FakeValue, _indent: usize) -> Result<Option<String>, String> {
        match to_json(value)? {
            Some(json) => serde_json::to_string_pretty(&json)
                .map(Some)
                .map_err(|e| e.to_string()),
            None => Ok(None),
        }
    }
}

fn to_json(value: &FakeValue) -> Result<Option<Value>, String> {
    let json = match value {
        FakeValue::Null => Value::Null,
        FakeValue::Undefined | FakeValue::Function(_) | FakeValue::Throwing => return Ok(None),
        FakeValue::Number(n) => Value::from(*n),
        FakeValue::Str(text) => Value::from(text.clone()),
        FakeValue::Array(items) => {
            let mut array = Vec::with_capacity(items.len());
            for item in items {
                array.push(to_json(item)?.unwrap_or(Value::Null));
            }
            Value::Array(array)
        }
        FakeValue::Object(fields) => {
            let mut map = Map::new();
            for (key, item) in fields {
                if let Some(json) = to_json(item)? {
                    map.insert(key.clone(), json);
                }
            }
            Value::Object(map)
        }
        FakeValue::Cyclic => return Err("cyclic <object> value".to_string()),
    };
    Ok(Some(json))
}

/// A panel plus the same panel as a trait object.
pub fn shared_panel() -> (Arc<Mutex<ConsolePanel>>, SharedPanel) {
    let panel = Arc::new(Mutex::new(ConsolePanel::new()));
    let shared: SharedPanel = panel.clone();
    (panel, shared)
}
