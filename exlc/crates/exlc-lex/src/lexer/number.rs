//! Number literal lexing.
//!
//! This module handles decimal, hexadecimal and octal-shaped literals.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `3.25`, `7.` (one optional `.`; a second `.` ends the token)
//! - Hexadecimal: `0x1F`, `0XAb` (text is normalised to a lowercase `0x` prefix)
//! - Octal-shaped: `0`, `054` (digits after the leading zero must be `0`-`7`)
//!
//! The token keeps the literal's text; turning it into a value is the
//! parser's job.

use exlc_util::Result;

use crate::Lexer;

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Lexes a number literal starting at a decimal digit.
    pub(crate) fn lex_number(&mut self) -> Result<()> {
        if self.source.current() == Some('0') {
            self.source.consume()?;

            if matches!(self.source.current(), Some('x' | 'X')) {
                self.source.consume()?;
                self.text.push_str("0x");
                self.take_while(|c| c.is_ascii_hexdigit())?;
                if self.text.len() == 2 {
                    return Err(self.error("No valid hex digits after 0x"));
                }
                return Ok(());
            }

            self.text.push('0');
            while let Some(c) = self.source.current().filter(char::is_ascii_digit) {
                if c >= '8' {
                    return Err(self.error("Digit out of range in octal constant"));
                }
                self.text.push(c);
                self.source.consume()?;
            }
            return self.lex_fraction();
        }

        self.take_while(|c| c.is_ascii_digit())?;
        self.lex_fraction()
    }

    /// Lexes an optional `.` and the digits after it.
    fn lex_fraction(&mut self) -> Result<()> {
        if self.source.current() == Some('.') {
            self.text.push('.');
            self.source.consume()?;
            self.take_while(|c| c.is_ascii_digit())?;
        }
        Ok(())
    }
}
