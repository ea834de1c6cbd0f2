//! Expression parsing by precedence level.
//!
//! Levels run from 15 (loosest, the comma sequence) down to 2 (prefix
//! operators), then to bracketed groups and constants. See [`crate::ops`]
//! for the operator table.
//!
//! # Grammar
//!
//! ```text
//! sequence := level14 ("," level14)*
//! levelN   := levelN-1 (opN levelN-1)*          N in 3..=12, 14
//! level13  := level12 ("?" sequence ":" sequence)*
//! level2   := ("!" | "~" | "-" | "+") level2 | primary
//! primary  := "(" sequence ")" | "[" sequence "]" | "{" sequence "}"
//!           | STRING | NUMBER | "true" | "false"
//! ```

use exlc_lex::TokenKind;
use exlc_util::{Error, Result};

use crate::ops::{Operator, ASSIGNMENT_LEVEL, UNARY_LEVEL};
use crate::value::{parse_number, Value};
use crate::{Expr, Parser};

impl<'a, I: Iterator<Item = char>> Parser<'a, I> {
    // =========================================================================
    // SEQUENCES AND BINARY LEVELS
    // =========================================================================

    /// Parses one or more comma-separated expressions.
    ///
    /// A single expression is returned as is, without a sequence wrapper.
    pub fn parse_sequence(&mut self) -> Result<Expr> {
        let first = self.parse_level(ASSIGNMENT_LEVEL)?;
        if !self.at_operator(",") {
            return Ok(first);
        }

        let mut items = vec![first];
        while self.at_operator(",") {
            self.bump()?;
            items.push(self.parse_level(ASSIGNMENT_LEVEL)?);
        }
        Ok(Expr::Sequence(items))
    }

    /// Parses an expression whose loosest operator sits at `level`.
    ///
    /// Binary operators associate to the left.
    pub fn parse_level(&mut self, level: u8) -> Result<Expr> {
        if level <= UNARY_LEVEL {
            return self.parse_unary();
        }

        let mut expr = self.parse_level(level - 1)?;

        while let Some(op) = self.operator_at(level) {
            self.bump()?;
            expr = match op {
                Operator::Ternary => self.parse_ternary(expr)?,
                _ => Expr::binary(op, expr, self.parse_level(level - 1)?),
            };
        }

        Ok(expr)
    }

    /// Parses both branches of `test ? positive : negative`; the `?` has
    /// been consumed.
    fn parse_ternary(&mut self, test: Expr) -> Result<Expr> {
        let positive = self.nested(Self::parse_sequence)?;
        self.expect(":")?;
        let negative = self.nested(Self::parse_sequence)?;
        Ok(Expr::ternary(test, positive, negative))
    }

    /// The operator at `level` spelled by the current token, if any.
    fn operator_at(&self, level: u8) -> Option<Operator> {
        self.current_operator()
            .and_then(|text| Operator::at_level(text, level))
    }

    // =========================================================================
    // PREFIX OPERATORS AND PRIMARIES
    // =========================================================================

    /// Parses prefix operators, right to left, around a primary.
    fn parse_unary(&mut self) -> Result<Expr> {
        match self.operator_at(UNARY_LEVEL) {
            Some(op) => {
                self.bump()?;
                Ok(Expr::unary(op, self.nested(Self::parse_unary)?))
            },
            None => self.parse_primary(),
        }
    }

    /// Parses a bracketed group or a constant.
    fn parse_primary(&mut self) -> Result<Expr> {
        if self.at_end() {
            return Err(Error::at(
                "Syntax error: unexpected end of input",
                self.here(),
            ));
        }

        let location = self.lexer.location();

        match self.lexer.kind() {
            TokenKind::Operator => {
                let close = match self.lexer.text() {
                    "(" => ")",
                    "[" => "]",
                    "{" => "}",
                    other => {
                        return Err(Error::at(
                            format!("Unexpected operator: {}", other),
                            location,
                        ))
                    },
                };
                self.bump()?;
                let expr = self.nested(Self::parse_sequence)?;
                self.expect(close)?;
                Ok(expr)
            },
            TokenKind::String => {
                let value = Value::String(self.lexer.text().to_string());
                self.bump()?;
                Ok(Expr::Constant(value))
            },
            TokenKind::Number => {
                // Octal-shaped literals such as `054` read as decimal.
                let number = parse_number(self.lexer.text())
                    .map_err(|e| Error::at(e.message(), location))?;
                if !number.is_finite() {
                    return Err(Error::at("Number out of range", location));
                }
                self.bump()?;
                Ok(Expr::constant(number))
            },
            TokenKind::Keyword => {
                let flag = match self.lexer.text() {
                    "true" => true,
                    "false" => false,
                    other => {
                        return Err(Error::at(
                            format!("Unexpected keyword: {}", other),
                            location,
                        ))
                    },
                };
                self.bump()?;
                Ok(Expr::constant(flag))
            },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
