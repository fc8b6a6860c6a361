//! Oxide Console - a page console for the Oxide JavaScript engine.

use anyhow::{Context, Result};
use clap::Parser;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use devtools::{DevConsole, RunOutcome, SharedPanel};
use js_engine::JsEngine;
use shell::{ConsoleConfig, Repl, TerminalPanel};

/// Oxide Console - evaluate JavaScript against a page and inspect its output
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Page script to load before running commands
    script: Option<PathBuf>,

    /// Command to run instead of reading commands from stdin (repeatable)
    #[arg(short, long = "eval", value_name = "CMD")]
    eval: Vec<String>,

    /// Write the console panel as HTML to this file on exit
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Truncate rendered strings after this many UTF-16 code units
    #[arg(long)]
    max_string_len: Option<usize>,

    /// Do not print console entries to the terminal
    #[arg(long)]
    no_echo: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Build the configuration: file values first, then command-line
    /// overrides.
    fn config(&self) -> Result<ConsoleConfig> {
        let mut config = match &self.config {
            Some(path) => ConsoleConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ConsoleConfig::default(),
        };

        if let Some(len) = self.max_string_len {
            config = config.with_max_string_len(len);
        }
        if self.no_echo {
            config = config.with_echo(false);
        }
        if let Some(path) = &self.html {
            config = config.with_html_output(path);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; stdout carries console output
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Oxide Console v{}", shell::VERSION);

    let config = args.config()?;
    let options = config.render_options();

    let terminal = Arc::new(Mutex::new(TerminalPanel::new(std::io::stdout(), config.echo)));
    let panel: SharedPanel = terminal.clone();
    let engine = JsEngine::with_panel(panel.clone(), options)?;
    let mut console = DevConsole::new(engine, panel).with_options(options);

    if let Some(path) = &args.script {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        if console.load_script(&source, &path.display().to_string()) {
            info!("Loaded {}", path.display());
        }
    }

    if args.eval.is_empty() {
        let mut repl = Repl::new(console, config.prompt.clone());
        repl.run(std::io::stdin().lock(), &mut std::io::stdout())?;
    } else {
        let failed = args
            .eval
            .iter()
            .filter(|command| console.run_command(command) == RunOutcome::Failed)
            .count();
        if failed > 0 {
            info!("{} of {} commands failed", failed, args.eval.len());
        }
    }

    if let Some(path) = &config.html_output {
        let html = terminal.lock().panel().to_html();
        std::fs::write(path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Console panel written to: {}", path.display());
    }

    info!("Console shutdown complete");

    Ok(())
}
