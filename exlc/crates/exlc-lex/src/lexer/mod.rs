//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Keyword/identifier lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing and escape decoding
//! - `operator` - Longest-match operator lexing

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{tokenize, Lexer};
