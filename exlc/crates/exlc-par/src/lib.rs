//! exlc-par - Parser for the exl expression language
//!
//! This crate turns the lexer's token stream into an [`Expr`] tree. It also
//! owns the pieces every later stage shares: the [`Operator`] precedence
//! table and the dynamically typed [`Value`] model.
//!
//! # Overview
//!
//! The parser is a recursive descent over fifteen precedence levels (see
//! [`ops`]). Each binary level parses the next tighter level and then folds
//! same-level operators left to right. The parser reads straight from a
//! [`Lexer`], one token of lookahead at a time.
//!
//! # Example Usage
//!
//! ```
//! use exlc_lex::Lexer;
//! use exlc_par::{compile, Expr};
//!
//! let mut lexer = Lexer::from_text("2 * (4 + 5)").unwrap();
//! let expr = compile(&mut lexer).unwrap();
//!
//! assert_eq!(expr.to_string(), "(2*(4+5))");
//! assert!(matches!(expr, Expr::Binary(_)));
//! ```
//!
//! # Errors
//!
//! Parsing stops at the first problem. Errors carry the location of the
//! offending token, or of the end of input when the input ran out.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ast;
pub mod expr;
pub mod ops;
pub mod value;

#[cfg(test)]
mod edge_cases;

use exlc_lex::{Lexer, TokenKind};
use exlc_util::{Error, Location, Result};
use tracing::debug;

// Re-export main types for convenience
pub use ast::{BinaryExpr, Expr, TernaryExpr, UnaryExpr};
pub use ops::{Operator, OperatorInfo, OPERATORS};
pub use value::{Value, ValueKind};

/// Deepest allowed nesting of groups, ternary branches and prefix operators.
pub const MAX_NESTING: u32 = 256;

/// Recursive descent parser over a borrowed [`Lexer`].
///
/// The current token lives in the lexer itself; the parser only remembers
/// whether there is one.
pub struct Parser<'a, I: Iterator<Item = char>> {
    /// Token source
    lexer: &'a mut Lexer<I>,

    /// False once the lexer has run out of tokens
    has_token: bool,

    /// Current nesting depth, bounded by [`MAX_NESTING`]
    depth: u32,
}

impl<'a, I: Iterator<Item = char>> Parser<'a, I> {
    /// Creates a parser and reads the first token.
    ///
    /// `lexer` should not have been advanced yet.
    pub fn new(lexer: &'a mut Lexer<I>) -> Result<Self> {
        let has_token = lexer.advance()?;
        Ok(Self {
            lexer,
            has_token,
            depth: 0,
        })
    }

    /// Parses the whole input as one expression.
    ///
    /// Fails if anything is left over after a complete expression.
    pub fn compile(mut self) -> Result<Expr> {
        let expr = self.parse_sequence()?;

        if self.has_token {
            return Err(Error::at(
                "Extraneous text after expression",
                self.lexer.location(),
            ));
        }

        debug!(nodes = expr.node_count(), expr = %expr, "compiled expression");
        Ok(expr)
    }

    // =========================================================================
    // TOKEN HELPERS
    // =========================================================================

    /// Moves to the next token.
    fn bump(&mut self) -> Result<()> {
        self.has_token = self.lexer.advance()?;
        Ok(())
    }

    /// True at end of input.
    fn at_end(&self) -> bool {
        !self.has_token
    }

    /// Text of the current token if it is an operator.
    fn current_operator(&self) -> Option<&str> {
        (self.has_token && self.lexer.kind() == TokenKind::Operator).then(|| self.lexer.text())
    }

    /// True if the current token is the operator `text`.
    fn at_operator(&self, text: &str) -> bool {
        self.current_operator() == Some(text)
    }

    /// Location of the current token, or of the end of input.
    fn here(&self) -> Location {
        if self.has_token {
            self.lexer.location()
        } else {
            self.lexer.source_location()
        }
    }

    /// Runs `parse` one nesting level deeper.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING {
            return Err(Error::at("Expression nested too deeply", self.here()));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Consumes the operator `text` or fails.
    fn expect(&mut self, text: &str) -> Result<()> {
        if self.at_operator(text) {
            return self.bump();
        }
        Err(Error::at(
            format!("Syntax error. Expecting \"{}\"", text),
            self.here(),
        ))
    }
}

/// Parses everything `lexer` produces into one expression.
pub fn compile<I: Iterator<Item = char>>(lexer: &mut Lexer<I>) -> Result<Expr> {
    Parser::new(lexer)?.compile()
}

/// Lexes and parses `text`.
///
/// ```
/// use exlc_par::parse_str;
///
/// assert_eq!(parse_str("1 < 3 ? 2 : 4").unwrap().to_string(), "((1<3)?2:4)");
/// assert!(parse_str("4 4").is_err());
/// ```
pub fn parse_str(text: &str) -> Result<Expr> {
    let mut lexer = Lexer::from_text(text)?;
    compile(&mut lexer)
}
