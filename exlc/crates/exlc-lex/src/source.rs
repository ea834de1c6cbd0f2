//! Character source for traversing exl input.
//!
//! This module provides the [`Source`] struct which pulls characters one at a
//! time from any character iterator, tracks the line/column of the current
//! character, and hides `//` and `/* */` comments from its consumer. A line
//! comment reads as a single `'\n'`, a block comment as a single `' '`.
//!
//! Comment elision can be switched off while the lexer is inside a string
//! literal; [`Source::suspend_comments`] does this for the lifetime of a
//! [`CommentGuard`] and restores the previous setting when the guard drops,
//! on every exit path.

use std::iter::Peekable;
use std::ops::{Deref, DerefMut};
use std::str::Chars;

use exlc_util::{Error, Location, Result};

/// A cursor over a sequential character stream.
///
/// `line()`/`column()` always describe the character returned by
/// [`current`](Source::current).
///
/// # Example
///
/// ```
/// use exlc_lex::Source;
///
/// let mut source = Source::from_text("a/* note */b").unwrap();
/// assert_eq!(source.current(), Some('a'));
/// source.consume().unwrap();
/// assert_eq!(source.current(), Some(' '));
/// source.consume().unwrap();
/// assert_eq!(source.current(), Some('b'));
/// source.consume().unwrap();
/// assert!(source.eof());
/// ```
pub struct Source<I: Iterator<Item = char>> {
    /// Remaining input, with one character of lookahead for comment openers.
    chars: Peekable<I>,

    /// Character under the cursor; `None` once the input is exhausted.
    current: Option<char>,

    /// Line of `current` (1-based).
    line: u32,

    /// Column of `current` (1-based).
    column: u32,

    /// Whether comments are elided.
    skipping_comments: bool,
}

impl<'a> Source<Chars<'a>> {
    /// Creates a comment-skipping source over a string slice.
    pub fn from_text(text: &'a str) -> Result<Self> {
        Self::new(text.chars())
    }
}

impl<I: Iterator<Item = char>> Source<I> {
    /// Creates a comment-skipping source and reads the first character.
    ///
    /// Fails if the input opens with an unterminated block comment.
    pub fn new(chars: I) -> Result<Self> {
        Self::with_comment_skipping(chars, true)
    }

    /// Creates a source with comment elision initially on or off.
    pub fn with_comment_skipping(chars: I, skip_comments: bool) -> Result<Self> {
        let mut source = Self {
            chars: chars.peekable(),
            current: None,
            line: 1,
            column: 0,
            skipping_comments: skip_comments,
        };
        source.read_next()?;
        Ok(source)
    }

    /// Returns the character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn eof(&self) -> bool {
        self.current.is_none()
    }

    /// Moves to the next visible character.
    ///
    /// Does nothing at end of input.
    pub fn consume(&mut self) -> Result<()> {
        if self.eof() {
            return Ok(());
        }
        self.read_next()
    }

    /// Line of the current character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the current character (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Location of the current character.
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// Turns comment elision on or off.
    pub fn set_comment_skipping(&mut self, flag: bool) {
        self.skipping_comments = flag;
    }

    /// Returns whether comments are currently elided.
    pub fn is_skipping_comments(&self) -> bool {
        self.skipping_comments
    }

    /// Disables comment elision until the returned guard is dropped.
    ///
    /// The guard dereferences to the source, so reading continues through it.
    ///
    /// ```
    /// use exlc_lex::Source;
    ///
    /// let mut source = Source::from_text("x").unwrap();
    /// {
    ///     let guard = source.suspend_comments();
    ///     assert!(!guard.is_skipping_comments());
    /// }
    /// assert!(source.is_skipping_comments());
    /// ```
    pub fn suspend_comments(&mut self) -> CommentGuard<'_, I> {
        let previous = self.skipping_comments;
        self.skipping_comments = false;
        CommentGuard {
            source: self,
            previous,
        }
    }

    /// Builds an error located at the current character.
    pub fn error(&self, message: impl Into<String>) -> Error {
        Error::at(message, self.location())
    }

    /// Reads one raw character, keeping line/column in step.
    fn advance(&mut self) {
        if self.current == Some('\n') {
            self.line += 1;
            self.column = 0;
        }
        self.current = self.chars.next();
        self.column += 1;
    }

    /// Reads the next character, collapsing a comment that starts there.
    fn read_next(&mut self) -> Result<()> {
        self.advance();

        if !self.skipping_comments || self.current != Some('/') {
            return Ok(());
        }

        match self.chars.peek().copied() {
            Some('/') => {
                while matches!(self.current, Some(c) if c != '\n') {
                    self.advance();
                }
                self.current = Some('\n');
            },
            Some('*') => {
                self.advance();

                // `star` is set when the previous character was '*'.
                let mut star = false;
                loop {
                    self.advance();
                    match self.current {
                        None => return Err(self.error("Unterminated comment")),
                        Some('/') if star => {
                            self.current = Some(' ');
                            break;
                        },
                        Some(c) => star = c == '*',
                    }
                }
            },
            _ => {},
        }

        Ok(())
    }
}

/// Scoped suspension of comment elision.
///
/// Created by [`Source::suspend_comments`]; restores the previous setting
/// when dropped, including when a `?` returns early.
pub struct CommentGuard<'s, I: Iterator<Item = char>> {
    source: &'s mut Source<I>,
    previous: bool,
}

impl<I: Iterator<Item = char>> Deref for CommentGuard<'_, I> {
    type Target = Source<I>;

    fn deref(&self) -> &Source<I> {
        self.source
    }
}

impl<I: Iterator<Item = char>> DerefMut for CommentGuard<'_, I> {
    fn deref_mut(&mut self) -> &mut Source<I> {
        self.source
    }
}

impl<I: Iterator<Item = char>> Drop for CommentGuard<'_, I> {
    fn drop(&mut self) {
        self.source.skipping_comments = self.previous;
    }
}
