//! Line-based command box.
//!
//! Each input line is a command, except for a few meta commands:
//!
//! - `:up` / `:down` recall history into the command box and print it
//! - an empty line runs whatever the command box holds
//! - `:history` lists past commands
//! - `:quit` exits

use devtools::{DevConsole, Evaluator, Key};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What the loop should do after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplAction {
    Continue,
    Quit,
}

/// Interactive driver around a [`DevConsole`].
pub struct Repl<H> {
    console: DevConsole<H>,
    prompt: String,
}

impl<H: Evaluator> Repl<H> {
    pub fn new(console: DevConsole<H>, prompt: impl Into<String>) -> Self {
        Self {
            console,
            prompt: prompt.into(),
        }
    }

    pub fn console(&self) -> &DevConsole<H> {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut DevConsole<H> {
        &mut self.console
    }

    pub fn into_console(self) -> DevConsole<H> {
        self.console
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<ReplAction> {
        match line.trim_end_matches(['\r', '\n']) {
            ":quit" | ":q" => return Ok(ReplAction::Quit),
            ":up" => self.recall(Key::ArrowUp, out)?,
            ":down" => self.recall(Key::ArrowDown, out)?,
            ":history" => {
                for (index, command) in self.console.history().entries().iter().enumerate() {
                    writeln!(out, "{:>4}  {}", index, command)?;
                }
            }
            "" => {
                if !self.console.command_box().value().is_empty() {
                    self.console.submit();
                }
            }
            command => {
                self.console.command_box_mut().set_value(command);
                self.console.submit();
            }
        }
        Ok(ReplAction::Continue)
    }

    fn recall(&mut self, key: Key, out: &mut impl Write) -> io::Result<()> {
        self.console.key_down(key);
        let value = self.console.command_box().value();
        debug!("Recalled {:?}", value);
        writeln!(out, "{}", value)
    }

    /// Read lines until `:quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self.prompt)?;
        out.flush()?;
        for line in input.lines() {
            if self.handle_line(&line?, out)? == ReplAction::Quit {
                break;
            }
            write!(out, "{}", self.prompt)?;
            out.flush()?;
        }
        Ok(())
    }
}
