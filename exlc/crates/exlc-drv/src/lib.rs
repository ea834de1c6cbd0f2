//! exlc-drv - Driver for the exl expression language
//!
//! Ties the pipeline together for line-oriented use. A [`Session`] takes one
//! expression per line, runs it through the lexer, parser and evaluator, and
//! prints the result according to its [`Config`]:
//!
//! - `emit = "tokens"` prints one token per line,
//! - `emit = "ast"` prints the parenthesised expression,
//! - `emit = "value"` prints `<expression> => <value>`.
//!
//! Failures are written to the error stream and counted in the [`Summary`];
//! with `stop_on_error` the session ends at the first one.
//!
//! # Example
//!
//! ```
//! use exlc_drv::{Config, Session};
//!
//! let mut session = Session::new(Config::default());
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//!
//! let summary = session
//!     .run_lines(["1 + 2", "'a' < 'b'"], &mut out, &mut err)
//!     .unwrap();
//!
//! assert!(summary.success());
//! assert_eq!(String::from_utf8(out).unwrap(), "(1+2) => 3\n(\"a\"<\"b\") => true\n");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;

use std::io::{BufRead, Write};

use exlc_eval::Context;
use exlc_lex::tokenize;
use exlc_par::parse_str;
use tracing::debug;

pub use config::{Config, EmitType, OutputConfig, ReplConfig, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};

/// Counts of what a session has processed so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines handed to the pipeline.
    pub evaluated: usize,

    /// Lines that failed to lex, parse or evaluate.
    pub failed: usize,
}

impl Summary {
    /// True when no line failed.
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// A driver session.
pub struct Session {
    config: Config,
    context: Context,
    summary: Summary,
}

impl Session {
    /// Creates a session with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            context: Context::new(),
            summary: Summary::default(),
        }
    }

    /// The configuration this session runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// What has been processed so far.
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Runs one expression and returns the text to print for it.
    ///
    /// The result is empty when `emit = "tokens"` and the line holds only
    /// whitespace and comments.
    pub fn render(&mut self, line: &str) -> Result<String> {
        let text = match self.config.output.emit {
            EmitType::Tokens => tokenize(line)?
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            EmitType::Ast => parse_str(line)?.to_string(),
            EmitType::Value => {
                let expr = parse_str(line)?;
                let value = self.context.evaluate(&expr)?;
                if self.config.repl.echo {
                    format!("{} => {}", expr, value)
                } else {
                    value.to_string()
                }
            },
        };
        Ok(text)
    }

    /// Runs one expression, printing its result to `out` or its error to `err`.
    ///
    /// Returns `Ok(false)` if the expression failed. Only I/O failures are
    /// returned as errors.
    pub fn run_line(
        &mut self,
        line: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<bool> {
        self.summary.evaluated += 1;

        match self.render(line) {
            Ok(text) => {
                if !text.is_empty() {
                    writeln!(out, "{}", text)?;
                }
                Ok(true)
            },
            Err(DriverError::Compile(e)) => {
                self.summary.failed += 1;
                debug!(line, error = %e, "expression failed");
                writeln!(err, "error: {}", e)?;
                Ok(false)
            },
            Err(e) => Err(e),
        }
    }

    /// Runs every non-blank line in order.
    ///
    /// Stops after the first failure when `stop_on_error` is set.
    pub fn run_lines<'l>(
        &mut self,
        lines: impl IntoIterator<Item = &'l str>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<Summary> {
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            if !self.run_line(line, out, err)? && self.config.repl.stop_on_error {
                break;
            }
        }

        out.flush()?;
        debug!(
            evaluated = self.summary.evaluated,
            failed = self.summary.failed,
            "batch finished"
        );
        Ok(self.summary)
    }

    /// Reads and runs lines from `input` until an empty line or end of input.
    ///
    /// The configured prompt is written to `out` before each read.
    pub fn repl<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        mut out: W,
        mut err: E,
    ) -> Result<Summary> {
        let mut buffer = String::new();

        loop {
            if !self.config.repl.prompt.is_empty() {
                write!(out, "{}", self.config.repl.prompt)?;
                out.flush()?;
            }

            buffer.clear();
            if input.read_line(&mut buffer)? == 0 {
                break;
            }

            let line = buffer.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                break;
            }

            if !self.run_line(line, &mut out, &mut err)? && self.config.repl.stop_on_error {
                break;
            }
        }

        out.flush()?;
        debug!(
            evaluated = self.summary.evaluated,
            failed = self.summary.failed,
            "repl finished"
        );
        Ok(self.summary)
    }
}
