//! Core error type shared by every exl phase.
//!
//! Scanning, lexing, parsing and evaluation all fail with the same [`Error`].
//! It carries a human readable message and, for failures tied to a place in
//! the input, the [`Location`] where the problem was detected. There is no
//! error-code taxonomy; callers tell failures apart by message only.

use thiserror::Error;

use crate::span::Location;

/// The single failure kind of the exl pipeline.
///
/// Any error aborts the whole compile or evaluate call; there is no partial
/// result and no recovery.
///
/// # Examples
///
/// ```
/// use exlc_util::{Error, Location};
///
/// let err = Error::new("Attempt to execute an empty sequence");
/// assert_eq!(err.location(), None);
///
/// let err = Error::at("Bad character '$'", Location::new(1, 3));
/// assert_eq!(err.message(), "Bad character '$'");
/// assert_eq!(err.to_string(), "Bad character '$' (line 1, column 3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", location_suffix(.location))]
pub struct Error {
    message: String,
    location: Option<Location>,
}

fn location_suffix(location: &Option<Location>) -> String {
    match location {
        Some(loc) => format!(" ({})", loc),
        None => String::new(),
    }
}

impl Error {
    /// Creates an error that is not tied to a place in the input.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Creates an error detected at `location`.
    pub fn at(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location: Some(location),
        }
    }

    /// The message without the location suffix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the error was detected, if known.
    pub fn location(&self) -> Option<Location> {
        self.location
    }
}

/// Result type alias for every exl phase.
pub type Result<T> = std::result::Result<T, Error>;
