//! Operator and punctuation lexing.
//!
//! Operators are matched greedily: characters are appended to the token while
//! the text is still listed in [`PUNCTUATORS`](crate::token::PUNCTUATORS).
//! Because every prefix of a listed operator is listed too, stopping at the
//! first miss leaves the longest valid operator in the buffer.

use exlc_util::Result;

use crate::token::{is_punctuator, is_space};
use crate::Lexer;

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Lexes the longest operator starting at the current character.
    ///
    /// Fails with "Bad character" if not even the first character starts an
    /// operator.
    pub(crate) fn lex_operator(&mut self) -> Result<()> {
        while let Some(c) = self.source.current() {
            self.text.push(c);

            if !is_punctuator(&self.text) {
                self.text.pop();
                if self.text.is_empty() {
                    return Err(self.error(format!("Bad character '{}'", c)));
                }
                break;
            }

            self.source.consume()?;
            if self.source.current().is_some_and(is_space) {
                break;
            }
        }

        Ok(())
    }
}
