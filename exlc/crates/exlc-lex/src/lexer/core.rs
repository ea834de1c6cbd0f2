//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use std::str::Chars;

use exlc_util::{Error, Location, Result};
use tracing::trace;

use crate::source::Source;
use crate::token::{is_space, Token, TokenKind};

/// Lexer for exl expressions.
///
/// The lexer pulls characters from a [`Source`] and produces one token at a
/// time. After a successful [`advance`](Lexer::advance) the token's kind,
/// text and location can be queried until the next call.
///
/// # Example
///
/// ```
/// use exlc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::from_text("1 + 'two'").unwrap();
///
/// assert!(lexer.advance().unwrap());
/// assert_eq!(lexer.kind(), TokenKind::Number);
/// assert_eq!(lexer.text(), "1");
///
/// assert!(lexer.advance().unwrap());
/// assert_eq!(lexer.text(), "+");
///
/// assert!(lexer.advance().unwrap());
/// assert_eq!(lexer.kind(), TokenKind::String);
/// assert_eq!(lexer.text(), "two");
///
/// assert!(!lexer.advance().unwrap());
/// assert!(lexer.eof());
/// ```
pub struct Lexer<I: Iterator<Item = char>> {
    /// Character source for the input.
    pub(crate) source: Source<I>,

    /// Text of the current token.
    pub(crate) text: String,

    /// Kind of the current token.
    kind: TokenKind,

    /// Location of the current token's first character.
    location: Location,

    /// Whether the last `advance` produced a token.
    has_token: bool,

    /// Set once the iterator has yielded an error.
    failed: bool,
}

impl<'a> Lexer<Chars<'a>> {
    /// Creates a lexer over a string slice.
    pub fn from_text(text: &'a str) -> Result<Self> {
        Ok(Self::new(Source::from_text(text)?))
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    /// Creates a lexer that takes ownership of `source`.
    pub fn new(source: Source<I>) -> Self {
        Self {
            source,
            text: String::new(),
            kind: TokenKind::Operator,
            location: Location::default(),
            has_token: false,
            failed: false,
        }
    }

    /// Moves on to the next (or first) token.
    ///
    /// Returns `Ok(false)` once the input holds nothing but whitespace and
    /// comments.
    pub fn advance(&mut self) -> Result<bool> {
        self.text.clear();
        self.has_token = false;

        self.skip_whitespace()?;

        let Some(c) = self.source.current() else {
            return Ok(false);
        };

        self.location = self.source.location();

        self.kind = match c {
            '"' | '\'' => {
                self.lex_string(c)?;
                TokenKind::String
            },
            c if c.is_ascii_digit() => {
                self.lex_number()?;
                TokenKind::Number
            },
            c if c.is_ascii_alphabetic() || c == '_' => {
                self.lex_keyword()?;
                TokenKind::Keyword
            },
            _ => {
                self.lex_operator()?;
                TokenKind::Operator
            },
        };
        self.has_token = true;

        trace!(
            line = self.location.line,
            column = self.location.column,
            kind = %self.kind,
            text = %self.text,
            "token"
        );

        Ok(true)
    }

    /// Advances and returns the new token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        if self.advance()? {
            Ok(Some(self.token()))
        } else {
            Ok(None)
        }
    }

    /// True once the source is exhausted and no token is pending.
    pub fn eof(&self) -> bool {
        self.source.eof() && !self.has_token
    }

    /// Kind of the current token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Decoded text of the current token.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line of the current token's first character (1-based).
    pub fn line(&self) -> u32 {
        self.location.line
    }

    /// Column of the current token's first character (1-based).
    pub fn column(&self) -> u32 {
        self.location.column
    }

    /// Location of the current token's first character.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Location of the next unread character.
    ///
    /// At end of input this is one column past the last character.
    pub fn source_location(&self) -> Location {
        self.source.location()
    }

    /// Snapshot of the current token.
    pub fn token(&self) -> Token {
        Token::new(self.kind, self.text.clone(), self.location)
    }

    /// Builds an error at the source's current character.
    pub(crate) fn error(&self, message: impl Into<String>) -> Error {
        self.source.error(message)
    }

    /// Appends characters to the token text while `pred` holds.
    pub(crate) fn take_while(&mut self, pred: impl Fn(char) -> bool) -> Result<()> {
        while let Some(c) = self.source.current().filter(|&c| pred(c)) {
            self.text.push(c);
            self.source.consume()?;
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while self.source.current().is_some_and(is_space) {
            self.source.consume()?;
        }
        Ok(())
    }
}

impl<I: Iterator<Item = char>> Iterator for Lexer<I> {
    type Item = Result<Token>;

    /// Yields tokens until end of input; stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            },
        }
    }
}

/// Lexes all of `text` into a token vector.
///
/// ```
/// use exlc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize(">>===").unwrap();
/// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, [">>=", "=="]);
/// assert!(tokens.iter().all(|t| t.kind == TokenKind::Operator));
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    Lexer::from_text(text)?.collect()
}
