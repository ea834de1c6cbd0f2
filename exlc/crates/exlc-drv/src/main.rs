//! exlc - command-line front end for the exl expression language.
//!
//! Evaluates expressions given as arguments, read from a file, or typed at a
//! line-oriented prompt on standard input.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use exlc_drv::{Config, EmitType, Session, Summary};

/// exlc - evaluate exl expressions
///
/// With no expressions and no file, reads one expression per line from
/// standard input until an empty line. Use `--` before expressions that
/// start with `-`.
#[derive(Parser, Debug)]
#[command(name = "exlc")]
#[command(author = "Exl Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate exl expressions", long_about = None)]
struct Cli {
    /// Expressions to evaluate
    expressions: Vec<String>,

    /// Evaluate each non-blank line of a file
    #[arg(short, long, conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// What to print for each expression
    #[arg(short, long, value_enum)]
    emit: Option<EmitType>,

    /// Prompt printed before each line read from standard input
    #[arg(long)]
    prompt: Option<String>,

    /// Print only the value, without the parsed expression
    #[arg(long)]
    no_echo: bool,

    /// Continue with the next line after a failure
    #[arg(short, long)]
    keep_going: bool,

    /// Enable verbose output
    #[arg(short, long, env = "EXLC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "EXLC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "EXLC_NO_COLOR")]
    no_color: bool,
}

impl Cli {
    /// Overrides configuration values with the flags that were given.
    fn apply(&self, config: &mut Config) {
        config.verbose |= self.verbose;
        if let Some(emit) = self.emit {
            config.output.emit = emit;
        }
        if let Some(prompt) = &self.prompt {
            config.repl.prompt = prompt.clone();
        }
        if self.no_echo {
            config.repl.echo = false;
        }
        if self.keep_going {
            config.repl.stop_on_error = false;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(summary) if summary.success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, sets up logging and runs the session.
fn run(cli: Cli) -> Result<Summary> {
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    init_logging(config.verbose, cli.no_color)?;
    debug!(emit = %config.output.emit, "configuration loaded");

    let mut session = Session::new(config);
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let summary = if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        session.run_lines(text.lines(), &mut out, &mut err)?
    } else if !cli.expressions.is_empty() {
        session.run_lines(cli.expressions.iter().map(String::as_str), &mut out, &mut err)?
    } else {
        session.repl(io::stdin().lock(), out, err)?
    };

    Ok(summary)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Log output goes to
/// stderr so it never mixes with results.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("Failed to initialize logging")
}

/// Load configuration from the specified path or default locations.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
