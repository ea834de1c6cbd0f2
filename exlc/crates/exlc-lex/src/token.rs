//! Token definitions for exl.
//!
//! A token is classified into one of four kinds and carries its decoded text
//! (for strings, the payload after escape processing) plus the location of
//! its first character.

use std::fmt;

use exlc_util::Location;

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Quoted string literal; text is the decoded payload.
    String,

    /// Numeric literal; text is the literal as written (`0x` prefix lowercased).
    Number,

    /// Keyword or identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    Keyword,

    /// Operator or punctuation from [`PUNCTUATORS`].
    Operator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::Operator => "operator",
        };
        f.write_str(name)
    }
}

/// A classified, positioned lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token class.
    pub kind: TokenKind,

    /// Decoded token text.
    pub text: String,

    /// Location of the token's first character.
    pub location: Location,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    /// Returns true if this is the operator token `text`.
    pub fn is_operator(&self, text: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.location.line, self.location.column, self.kind, self.text
        )
    }
}

/// Every operator and punctuation mark the lexer recognises.
///
/// Operators are read by longest match, extending a candidate one character
/// at a time while it is still listed here. That only works if every prefix
/// of a multi-character entry is itself an entry (`>`, `>>` and `>>=`).
///
/// Some entries (`->`, `++`, `--`, `.`, `;`) have no meaning to the parser
/// and surface as syntax errors there.
pub const PUNCTUATORS: &[&str] = &[
    "^", "^=", "~", "<", "<<", "<<=", "<=", "=", "==", ">", ">>", ">>=", ">=", "|", "|=", "||",
    "-", "-=", "->", "--", ",", "!", "!=", "?", ":", "/", "/=", ".", "(", ")", "[", "]", "*",
    "*=", "&", "&=", "&&", "%", "%=", "+", "+=", "++", ";", "{", "}",
];

/// Returns true if `text` is listed in [`PUNCTUATORS`].
#[inline]
pub fn is_punctuator(text: &str) -> bool {
    PUNCTUATORS.contains(&text)
}

/// Whitespace as the C locale defines it: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}
