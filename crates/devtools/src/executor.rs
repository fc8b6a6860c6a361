//! Command execution.

use crate::entry::{Category, LogEntry};
use crate::history::HistoryBuffer;
use crate::panel::SharedPanel;
use crate::render::{render, render_text, RenderOptions, ValueInspector};
use thiserror::Error;
use tracing::{debug, warn};

/// Global the command is assigned to on the first evaluation attempt, so that
/// object literals evaluate as expressions instead of blocks.
pub const TEMP_BINDING: &str = "__temp__";

/// Failure reported by a host evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvalError {
    message: String,
}

impl EvalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Host capability that evaluates source text in the page's global scope.
pub trait Evaluator: ValueInspector {
    fn evaluate(&mut self, source: &str) -> Result<Self::Value, EvalError>;
}

/// How a command run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// A value was produced and rendered as a log entry.
    Evaluated,
    /// Both evaluation attempts failed; an error entry was rendered.
    Failed,
}

/// Replace typographic quotes with their ASCII equivalents.
pub fn normalize_quotes(command: &str) -> String {
    command
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            _ => c,
        })
        .collect()
}

/// Evaluate a command, first as the right-hand side of an assignment and then
/// as-is. The error of the second attempt is returned when both fail.
pub fn evaluate_command<H>(host: &mut H, command: &str) -> Result<H::Value, EvalError>
where
    H: Evaluator + ?Sized,
{
    let source = normalize_quotes(command);
    match host.evaluate(&format!("{}={}", TEMP_BINDING, source)) {
        Ok(value) => Ok(value),
        Err(err) => {
            debug!("Assignment form failed ({}), evaluating as-is", err);
            host.evaluate(&source)
        }
    }
}

/// Run a command: evaluate it, render the result or the failure under the
/// command as prefix, and record the command in history.
pub fn run_command<H>(
    host: &mut H,
    panel: &SharedPanel,
    history: &mut HistoryBuffer,
    command: &str,
    options: &RenderOptions,
) -> RunOutcome
where
    H: Evaluator + ?Sized,
{
    let outcome = match evaluate_command(host, command) {
        Ok(value) => {
            render(
                host,
                panel,
                Category::Log,
                std::slice::from_ref(&value),
                Some(command),
                options,
            );
            RunOutcome::Evaluated
        }
        Err(err) => {
            warn!("Command failed: {}", err);
            let line = render_text(&format!("Error: {}", err.message()), options);
            panel.lock().append(LogEntry::new(
                Category::Error,
                Some(command.to_string()),
                vec![line],
            ));
            RunOutcome::Failed
        }
    };

    history.push_and_reset(command);
    outcome
}
