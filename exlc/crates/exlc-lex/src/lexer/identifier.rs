//! Keyword and identifier lexing.
//!
//! exl has no variables, so every identifier is reported as a keyword token;
//! the parser accepts only `true` and `false`.

use exlc_util::Result;

use crate::Lexer;

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Lexes a keyword: a letter or `_` followed by letters, digits and `_`.
    pub(crate) fn lex_keyword(&mut self) -> Result<()> {
        self.take_while(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}
