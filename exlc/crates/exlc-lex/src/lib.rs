//! exlc-lex - Lexical Analyzer for the exl expression language
//!
//! This crate turns a character stream into a stream of tokens that can be
//! consumed by the parser.
//!
//! # Overview
//!
//! Lexing happens in two layers:
//!
//! - [`Source`] reads characters one at a time, tracks line/column, and
//!   hides comments (`//` to end of line reads as `'\n'`, `/* ... */` reads
//!   as `' '`).
//! - [`Lexer`] skips whitespace and classifies what follows as a string,
//!   number, keyword or operator token.
//!
//! # Example Usage
//!
//! ```
//! use exlc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::from_text("2 * /* twice */ 0x10").unwrap();
//!
//! let tokens: Vec<_> = lexer.by_ref().collect::<Result<_, _>>().unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].kind, TokenKind::Number);
//! assert_eq!(tokens[2].text, "0x10");
//! ```
//!
//! # Token Categories
//!
//! - **String**: `"..."` or `'...'` with C escapes; the token text is the
//!   decoded payload
//! - **Number**: `42`, `3.5`, `0x1f`, `017`
//! - **Keyword**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Operator**: longest match against [`PUNCTUATORS`]
//!
//! # Errors
//!
//! Every failure is an [`exlc_util::Error`] located at the character where
//! it was detected: unterminated comment or string, unknown escape, bad
//! `\x`/octal escape, `0x` without digits, `8`/`9` in an octal literal, and
//! characters that start no operator.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod source;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use lexer::{tokenize, Lexer};
pub use source::{CommentGuard, Source};
pub use token::{is_punctuator, is_space, Token, TokenKind, PUNCTUATORS};
