//! Dynamically typed values and the coercions between them.
//!
//! A [`Value`] is one of four kinds. Binary operators first settle on a common
//! kind with [`ValueKind::promote`] and then convert both operands with the
//! pure coercion methods below; no coercion mutates its input.

use std::fmt;

use exlc_util::{Error, Result};

/// Dynamic type tag of a [`Value`].
///
/// Variants are declared in dominance order, so the promoted kind of two
/// operands is the smaller of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    /// Evaluation gave up; absorbs every other kind.
    Unknown,
    /// Text.
    String,
    /// 64-bit float; the only numeric domain.
    Number,
    /// `true` or `false`.
    Boolean,
}

impl ValueKind {
    /// Kind both operands of a binary operator are converted to.
    ///
    /// ```
    /// use exlc_par::ValueKind;
    ///
    /// assert_eq!(ValueKind::promote(ValueKind::Number, ValueKind::String), ValueKind::String);
    /// assert_eq!(ValueKind::promote(ValueKind::Boolean, ValueKind::Number), ValueKind::Number);
    /// assert_eq!(ValueKind::promote(ValueKind::Unknown, ValueKind::String), ValueKind::Unknown);
    /// ```
    pub fn promote(left: ValueKind, right: ValueKind) -> ValueKind {
        left.min(right)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Unknown => "unknown",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Result of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No meaningful value.
    #[default]
    Unknown,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
}

impl Value {
    /// Dynamic type tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Unknown => ValueKind::Unknown,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Returns true for [`Value::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Numeric reading of the value.
    ///
    /// Strings must hold a number in their entirety; booleans read as 1 or 0.
    /// Unknown reads as NaN.
    pub fn to_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::String(s) => parse_number(s),
            Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Unknown => Ok(f64::NAN),
        }
    }

    /// Textual reading of the value, without quotes.
    pub fn to_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Number(n) => format_number(*n),
            Value::Boolean(b) => b.to_string(),
            Value::Unknown => String::new(),
        }
    }

    /// Truth reading of the value.
    ///
    /// The strings `"true"` and `"false"` read as themselves, any other string
    /// is true when non-empty, and numbers are true when nonzero.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::String(s) => match s.as_str() {
                "true" => true,
                "false" => false,
                other => !other.is_empty(),
            },
            Value::Number(n) => *n != 0.0,
            Value::Unknown => false,
        }
    }

    /// Integer reading used by `%`, shifts and the bitwise operators.
    ///
    /// See [`truncate_int32`].
    pub fn to_int32(&self) -> Result<i32> {
        Ok(truncate_int32(self.to_number()?))
    }

    /// Converts to a value of `kind`.
    ///
    /// Converting to [`ValueKind::Unknown`] always yields Unknown.
    pub fn coerce(&self, kind: ValueKind) -> Result<Value> {
        if self.kind() == kind {
            return Ok(self.clone());
        }
        Ok(match kind {
            ValueKind::Unknown => Value::Unknown,
            ValueKind::String => Value::String(self.to_text()),
            ValueKind::Number => Value::Number(self.to_number()?),
            ValueKind::Boolean => Value::Boolean(self.to_bool()),
        })
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write_quoted(f, s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Unknown => f.write_str("(invalid value)"),
        }
    }
}

/// Narrows `n` to a 32-bit signed integer.
///
/// Truncates toward zero and keeps the low 32 bits, so `4294967295` reads as
/// `-1`. NaN reads as 0.
///
/// ```
/// use exlc_par::value::truncate_int32;
///
/// assert_eq!(truncate_int32(-7.9), -7);
/// assert_eq!(truncate_int32(4294967295.0), -1);
/// assert_eq!(truncate_int32(2147483648.0), i32::MIN);
/// ```
pub fn truncate_int32(n: f64) -> i32 {
    n as i64 as i32
}

/// Canonical decimal text of a number: `13`, `2.5`, `-0.125`.
pub fn format_number(n: f64) -> String {
    n.to_string()
}

/// Parses `text` as a floating point number.
///
/// Leading whitespace, a sign, a `0x` hexadecimal integer, exponents, `inf`
/// and `nan` are accepted. The whole of `text` must be consumed.
///
/// ```
/// use exlc_par::value::parse_number;
///
/// assert_eq!(parse_number("0xabc").unwrap(), 2748.0);
/// assert_eq!(parse_number(" -1.5e2").unwrap(), -150.0);
/// assert!(parse_number("12abc").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<f64> {
    let invalid = || Error::new(format!("Invalid conversion to number: '{}'", text));

    let trimmed = text.trim_start_matches(exlc_lex::is_space);
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let hex = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"));

    let magnitude = match hex {
        Some(digits) if !digits.is_empty() => digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(16).map(|d| acc * 16.0 + f64::from(d))
        }),
        // A bare `0x` reads as `0` followed by garbage.
        Some(_) => None,
        // Signs were stripped above; a second one is not a number.
        None if unsigned.starts_with(['+', '-']) => None,
        None => unsigned.parse::<f64>().ok(),
    };

    let magnitude = magnitude.ok_or_else(invalid)?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Writes `s` between double quotes, escaped so that it lexes back to `s`.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c if c.is_ascii_control() => write!(f, "\\x{:02x}", u32::from(c))?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}
