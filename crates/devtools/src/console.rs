//! The page console instance.

use crate::entry::Category;
use crate::error_hook::{ErrorEvent, ScriptRunner};
use crate::executor::{run_command, Evaluator, RunOutcome};
use crate::history::HistoryBuffer;
use crate::input::{CommandBox, Key, KeyResponse};
use crate::panel::SharedPanel;
use crate::render::{render, RenderOptions};
use tracing::{debug, warn};

/// One console attached to a page: the host it evaluates in, the command
/// history, the panel and the command box.
pub struct DevConsole<H> {
    host: H,
    history: HistoryBuffer,
    panel: SharedPanel,
    command_box: CommandBox,
    options: RenderOptions,
}

impl<H: Evaluator> DevConsole<H> {
    pub fn new(host: H, panel: SharedPanel) -> Self {
        Self {
            host,
            history: HistoryBuffer::new(),
            panel,
            command_box: CommandBox::new(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Evaluate a command and render its result.
    pub fn run_command(&mut self, command: &str) -> RunOutcome {
        debug!("Running command: {}", command);
        run_command(
            &mut self.host,
            &self.panel,
            &mut self.history,
            command,
            &self.options,
        )
    }

    /// Run whatever is in the command box, clear it and scroll the result
    /// into view.
    pub fn submit(&mut self) -> RunOutcome {
        let command = self.command_box.submit();
        let outcome = self.run_command(&command);
        self.panel.lock().scroll_into_view();
        outcome
    }

    /// Forward a key press to the command box.
    pub fn key_down(&mut self, key: Key) -> KeyResponse {
        self.command_box.key_down(key, &mut self.history)
    }

    pub fn log(&mut self, items: &[H::Value]) {
        self.render(Category::Log, items);
    }

    pub fn warn(&mut self, items: &[H::Value]) {
        self.render(Category::Warn, items);
    }

    pub fn error(&mut self, items: &[H::Value]) {
        self.render(Category::Error, items);
    }

    fn render(&mut self, category: Category, items: &[H::Value]) {
        render(&mut self.host, &self.panel, category, items, None, &self.options);
    }

    /// Global error hook: show an uncaught error with its location.
    pub fn report_error(&mut self, event: &ErrorEvent) {
        warn!("Uncaught error: {}", event.describe());
        self.panel.lock().append(event.to_entry(&self.options));
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn command_box(&self) -> &CommandBox {
        &self.command_box
    }

    pub fn command_box_mut(&mut self) -> &mut CommandBox {
        &mut self.command_box
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn panel(&self) -> &SharedPanel {
        &self.panel
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl<H: ScriptRunner> DevConsole<H> {
    /// Run a page script, reporting an uncaught error through the global
    /// error hook. Returns whether the script completed.
    pub fn load_script(&mut self, source: &str, name: &str) -> bool {
        debug!("Loading script {}", name);
        match self.host.run_script(source, name) {
            Ok(()) => true,
            Err(event) => {
                self.report_error(&event);
                false
            }
        }
    }
}
