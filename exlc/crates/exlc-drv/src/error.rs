//! Error handling for the exl driver.
//!
//! Compile and evaluation failures keep their own [`exlc_util::Error`]; the
//! driver wraps them together with I/O and configuration failures.

use thiserror::Error;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An expression failed to lex, parse or evaluate.
    #[error(transparent)]
    Compile(#[from] exlc_util::Error),

    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
