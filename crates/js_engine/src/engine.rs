//! JavaScript engine wrapper.

use crate::inspect::{format_js_error, BoaInspector, InspectHelpers};
use boa_engine::{
    Context, JsResult, JsString, JsValue, Source,
    js_string,
    property::Attribute,
};
use devtools::render::RenderOptions;
use devtools::{
    ConsolePanel, ErrorEvent, EvalError, Evaluator, ScriptRunner, SharedPanel, ValueInspector,
    ValueKind,
};
use tracing::debug;

/// JavaScript engine hosting the page console.
pub struct JsEngine {
    /// Boa context.
    context: Context,
    /// Inspection helpers captured at start-up.
    helpers: InspectHelpers,
    /// Panel the `console` object writes to.
    panel: SharedPanel,
    /// Script counter for identification.
    script_counter: u64,
}

impl JsEngine {
    /// Create an engine writing to a panel of its own.
    pub fn new() -> Result<Self, JsEngineError> {
        let panel: SharedPanel = ConsolePanel::shared();
        Self::with_panel(panel, RenderOptions::default())
    }

    /// Create an engine whose `console` output goes to `panel`.
    pub fn with_panel(panel: SharedPanel, options: RenderOptions) -> Result<Self, JsEngineError> {
        let mut context = Context::default();

        let helpers = InspectHelpers::install(&mut context)
            .map_err(|e| JsEngineError::Setup(format_js_error(&e, &mut context)))?;
        Self::setup_globals(&mut context, &helpers, &panel, options)
            .map_err(|e| JsEngineError::Setup(format_js_error(&e, &mut context)))?;

        Ok(Self {
            context,
            helpers,
            panel,
            script_counter: 0,
        })
    }

    /// Set up the globals page scripts expect.
    fn setup_globals(
        context: &mut Context,
        helpers: &InspectHelpers,
        panel: &SharedPanel,
        options: RenderOptions,
    ) -> JsResult<()> {
        crate::console::register_console(context, helpers.clone(), panel.clone(), options)?;

        // Window object (self-referential global)
        let window = context.global_object();
        context.register_global_property(js_string!("window"), window.clone(), Attribute::all())?;
        context.register_global_property(js_string!("self"), window.clone(), Attribute::all())?;
        context.register_global_property(js_string!("globalThis"), window, Attribute::all())?;
        Ok(())
    }

    /// Execute source in the global scope and return its completion value.
    pub fn execute(&mut self, source: &str) -> Result<JsValue, JsEngineError> {
        self.script_counter += 1;
        debug!(script = self.script_counter, "Evaluating {} bytes", source.len());

        let result = self.context.eval(Source::from_bytes(source.as_bytes()));
        // Promise reactions may log to the console as well.
        self.context.run_jobs();

        result.map_err(|e| JsEngineError::Execution(format_js_error(&e, &mut self.context)))
    }

    /// Get a global variable.
    pub fn get_global(&mut self, name: &str) -> Result<JsValue, JsEngineError> {
        let global = self.context.global_object();
        global
            .get(JsString::from(name), &mut self.context)
            .map_err(|e| JsEngineError::Execution(format_js_error(&e, &mut self.context)))
    }

    /// Number of sources evaluated so far.
    pub fn script_count(&self) -> u64 {
        self.script_counter
    }

    /// Panel the `console` object writes to.
    pub fn panel(&self) -> &SharedPanel {
        &self.panel
    }

    fn inspector(&mut self) -> BoaInspector<'_> {
        BoaInspector::new(&mut self.context, &self.helpers)
    }
}

impl Evaluator for JsEngine {
    fn evaluate(&mut self, source: &str) -> Result<JsValue, EvalError> {
        self.execute(source).map_err(|e| EvalError::new(e.message()))
    }
}

impl ValueInspector for JsEngine {
    type Value = JsValue;

    fn inspect(&mut self, value: &JsValue) -> ValueKind {
        self.inspector().inspect(value)
    }

    fn snapshot(&mut self, value: &JsValue) -> Result<JsValue, String> {
        self.inspector().snapshot(value)
    }

    fn stringify(&mut self, value: &JsValue, indent: usize) -> Result<Option<String>, String> {
        self.inspector().stringify(value, indent)
    }
}

impl ScriptRunner for JsEngine {
    fn run_script(&mut self, source: &str, name: &str) -> Result<(), ErrorEvent> {
        self.execute(source).map(|_| ()).map_err(|e| {
            let message = e.message().to_string();
            let (line, col) = error_position(&message);
            ErrorEvent::new(message, name, line, col)
        })
    }
}

/// Position embedded in a parser message ("... at line 3, col 7"), or
/// `(0, 0)` when the error carries none.
fn error_position(message: &str) -> (u32, u32) {
    let Some(start) = message.rfind("line ") else {
        return (0, 0);
    };
    let rest = &message[start + "line ".len()..];
    let Some((line, col)) = rest.split_once(", col ") else {
        return (0, 0);
    };
    let col: String = col.chars().take_while(|c| c.is_ascii_digit()).collect();
    match (line.trim().parse(), col.parse()) {
        (Ok(line), Ok(col)) => (line, col),
        _ => (0, 0),
    }
}

/// JavaScript engine error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum JsEngineError {
    #[error("Setup error: {0}")]
    Setup(String),
    #[error("Execution error: {0}")]
    Execution(String),
}

impl JsEngineError {
    /// The underlying JavaScript message.
    pub fn message(&self) -> &str {
        match self {
            JsEngineError::Setup(message) | JsEngineError::Execution(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devtools::error_hook::ERROR_PREFIX;
    use devtools::{Category, DevConsole, LogEntry, RunOutcome};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn console() -> (Arc<Mutex<ConsolePanel>>, DevConsole<JsEngine>) {
        let panel = ConsolePanel::shared();
        let shared: SharedPanel = panel.clone();
        let engine = JsEngine::with_panel(shared.clone(), RenderOptions::default()).unwrap();
        (panel, DevConsole::new(engine, shared))
    }

    fn entries(panel: &Arc<Mutex<ConsolePanel>>) -> Vec<LogEntry> {
        let entries = panel.lock().entries().to_vec();
        entries
    }

    #[test]
    fn test_basic_execution() {
        let mut engine = JsEngine::new().unwrap();
        let result = engine.execute("1 + 2").unwrap();
        assert_eq!(result.as_number().unwrap(), 3.0);
    }

    #[test]
    fn test_string_execution() {
        let mut engine = JsEngine::new().unwrap();
        let result = engine.execute("'hello' + ' world'").unwrap();
        assert_eq!(
            result.as_string().unwrap().to_std_string_escaped(),
            "hello world"
        );
    }

    #[test]
    fn test_execution_error_message() {
        let mut engine = JsEngine::new().unwrap();
        let err = engine.execute("throw new Error('boom')").unwrap_err();
        assert_eq!(err.message(), "boom");

        let err = engine.execute("throw 'plain'").unwrap_err();
        assert_eq!(err.message(), "plain");
    }

    #[test]
    fn test_window_is_global() {
        let mut engine = JsEngine::new().unwrap();
        engine.execute("window.answer = 42").unwrap();
        let answer = engine.get_global("answer").unwrap();
        assert_eq!(answer.as_number().unwrap(), 42.0);

        let same = engine.execute("globalThis === window && self === window").unwrap();
        assert_eq!(same.as_boolean(), Some(true));
    }

    #[test]
    fn test_object_literal_command() {
        let (panel, mut console) = console();

        assert_eq!(console.run_command("{a:1}"), RunOutcome::Evaluated);

        let entries = entries(&panel);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, Category::Log);
        assert_eq!(entries[0].prefix.as_deref(), Some("{a:1}"));
        assert_eq!(entries[0].lines, vec!["{\n  \"a\": 1\n}"]);
        assert_eq!(console.history().entries(), ["{a:1}"]);

        let temp = console.host_mut().get_global("__temp__").unwrap();
        assert!(temp.is_object());
    }

    #[test]
    fn test_syntax_error_command() {
        let (panel, mut console) = console();

        assert_eq!(console.run_command("1+"), RunOutcome::Failed);

        let entries = entries(&panel);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, Category::Error);
        assert_eq!(entries[0].prefix.as_deref(), Some("1+"));
        assert!(entries[0].lines[0].starts_with("Error: "));
        assert_eq!(console.history().entries(), ["1+"]);
    }

    #[test]
    fn test_curly_quotes_command() {
        let (panel, mut console) = console();

        let command = "console.log(\u{2018}hi\u{2019})";
        assert_eq!(console.run_command(command), RunOutcome::Evaluated);

        let entries = entries(&panel);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].lines, vec!["hi"]);
        assert!(entries[0].prefix.is_none());
        assert_eq!(entries[1].prefix.as_deref(), Some(command));
        assert_eq!(entries[1].lines, vec![""]);
        assert_eq!(console.history().entries(), [command]);
    }

    #[test]
    fn test_statement_command_falls_back() {
        let (panel, mut console) = console();

        console.run_command("var x = 5");
        console.run_command("x * 2");

        let entries = entries(&panel);
        assert_eq!(entries[0].lines, vec![""]);
        assert_eq!(entries[1].lines, vec!["10"]);
    }

    #[test]
    fn test_circular_value_command() {
        let (panel, mut console) = console();

        console.run_command("var o = {}; o.self = o; o");

        let entries = entries(&panel);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, Category::Log);
        assert!(entries[0].lines[0].starts_with("Error: "));
    }

    #[test]
    fn test_function_command() {
        let (panel, mut console) = console();

        console.run_command("(function add(a, b) { return a + b; })");

        assert!(entries(&panel)[0].lines[0].contains("add"));
    }

    #[test]
    fn test_long_string_command() {
        let (panel, mut console) = console();

        console.run_command("'x'.repeat(400)");

        assert_eq!(entries(&panel)[0].lines[0], format!("{}...", "x".repeat(300)));
    }

    #[test]
    fn test_uncaught_script_error() {
        let (panel, mut console) = console();

        assert!(console.load_script("console.log('loaded')", "page.js"));
        assert!(!console.load_script("throw new Error('boom')", "page.js"));

        let entries = entries(&panel);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].lines, vec!["loaded"]);
        assert_eq!(entries[1].category, Category::Error);
        assert_eq!(entries[1].prefix.as_deref(), Some(ERROR_PREFIX));
        assert_eq!(entries[1].lines, vec!["boom in page.js, line 0, col 0."]);
    }

    #[test]
    fn test_error_position() {
        assert_eq!(error_position("expected ';' at line 3, col 7"), (3, 7));
        assert_eq!(error_position("abrupt end at line 12, col 1."), (12, 1));
        assert_eq!(error_position("boom"), (0, 0));
        assert_eq!(error_position("line of text"), (0, 0));
    }

    #[test]
    fn test_syntax_error_location_in_script() {
        let (panel, mut console) = console();

        assert!(!console.load_script("var a = 1 +;", "bad.js"));

        let entries = entries(&panel);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].lines[0].ends_with(" in bad.js, line 1, col 12."));
    }

    #[test]
    fn test_thrown_object_uses_message_property() {
        let (panel, mut console) = console();

        assert_eq!(console.run_command("throw {message: 'm'}"), RunOutcome::Failed);
        console.run_command("throw 42");

        let entries = entries(&panel);
        assert_eq!(entries[0].lines, vec!["Error: m"]);
        assert_eq!(entries[1].lines, vec!["Error: 42"]);
    }
}
