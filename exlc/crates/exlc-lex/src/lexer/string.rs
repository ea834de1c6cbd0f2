//! String literal lexing.
//!
//! Strings are delimited by `"` or `'` and must close with the same mark.
//! Comment elision is suspended while the body is read so that text such as
//! `'/* not a comment */'` survives intact.
//!
//! # Escapes
//!
//! | Escape | Result |
//! |--------|--------|
//! | `\a \b \f \n \r \t \v` | the matching control character |
//! | `\\ \? \' \"` | the character itself |
//! | `\xH`, `\xHH` | byte value from one or two hex digits |
//! | `\O`, `\OO`, `\OOO` | byte value from one to three octal digits (max 255) |
//!
//! Byte values become the `char` with the same code point (Latin-1).

use exlc_util::Result;

use crate::source::Source;
use crate::Lexer;

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Lexes a string literal whose opening `delimiter` is the current
    /// character, storing the decoded payload as the token text.
    pub(crate) fn lex_string(&mut self, delimiter: char) -> Result<()> {
        let mut source = self.source.suspend_comments();
        source.consume()?;

        loop {
            match source.current() {
                None => return Err(source.error("Unterminated string")),
                Some(c) if c == delimiter => break,
                Some('\\') => {
                    source.consume()?;
                    let decoded = read_escape(&mut *source)?;
                    self.text.push(decoded);
                },
                Some(c) => {
                    self.text.push(c);
                    source.consume()?;
                },
            }
        }

        // Step past the closing delimiter with comment elision back on.
        drop(source);
        self.source.consume()
    }
}

/// Decodes the escape sequence whose first character (after `\`) is current.
fn read_escape<I: Iterator<Item = char>>(source: &mut Source<I>) -> Result<char> {
    let Some(c) = source.current() else {
        return Err(source.error("Unterminated string"));
    };

    if let Some(digit) = c.to_digit(8) {
        let value = read_digits(source, digit, 8, 3)?;
        return u8::try_from(value)
            .map(char::from)
            .map_err(|_| source.error("Octal escape sequence out of range"));
    }

    if c == 'x' {
        source.consume()?;
        let Some(digit) = source.current().and_then(|c| c.to_digit(16)) else {
            return Err(source.error("Expecting a hex digit after \\x"));
        };
        let value = read_digits(source, digit, 16, 2)?;
        // Two hex digits never exceed 0xff.
        return Ok(char::from(value as u8));
    }

    let decoded = match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        '\\' | '?' | '\'' | '"' => c,
        _ => return Err(source.error(format!("Unknown escape character '{}'", c))),
    };
    source.consume()?;
    Ok(decoded)
}

/// Accumulates up to `max` digits in `radix`, the first of which (`first`)
/// is the current character.
fn read_digits<I: Iterator<Item = char>>(
    source: &mut Source<I>,
    first: u32,
    radix: u32,
    max: usize,
) -> Result<u32> {
    let mut value = first;
    source.consume()?;

    for _ in 1..max {
        match source.current().and_then(|c| c.to_digit(radix)) {
            Some(digit) => {
                value = value * radix + digit;
                source.consume()?;
            },
            None => break,
        }
    }

    Ok(value)
}
