//! exlc-util - Core Utilities and Foundation Types
//!
//! This crate holds the small set of types shared by every phase of the exl
//! pipeline (source → lexer → parser → evaluator):
//!
//! - [`Error`] - the single failure kind raised by any phase
//! - [`Location`] - a 1-based line/column pair attached to lexical and
//!   syntactic failures
//!
//! # Example
//!
//! ```
//! use exlc_util::{Error, Location};
//!
//! let err = Error::at("Unterminated string", Location::new(1, 5));
//! assert_eq!(err.to_string(), "Unterminated string (line 1, column 5)");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod span;

pub use error::{Error, Result};
pub use span::Location;
