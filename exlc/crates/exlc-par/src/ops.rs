//! Operator table.
//!
//! Every operator the parser understands is listed once in [`OPERATORS`]
//! together with its source text and precedence level. The table is shared
//! read-only by the parser (grouping), the printer and the evaluator (error
//! messages).
//!
//! # Precedence Levels (tightest to loosest)
//!
//! | Level | Operators | Form |
//! |-------|-----------|------|
//! | 2 | `!` `~` `-` `+` | prefix, right-associative |
//! | 3 | `*` `/` `%` | left |
//! | 4 | `+` `-` | left |
//! | 5 | `<<` `>>` | left |
//! | 6 | `<` `<=` `>` `>=` | left |
//! | 7 | `==` `!=` | left |
//! | 8 | `&` | left |
//! | 9 | `^` | left |
//! | 10 | `\|` | left |
//! | 11 | `&&` | left |
//! | 12 | `\|\|` | left |
//! | 13 | `?` `:` | ternary |
//! | 14 | `=` `+=` `-=` `*=` `/=` `%=` `&=` `^=` `\|=` `<<=` `>>=` | left |
//! | 15 | `,` | sequence |

use std::fmt;

use exlc_util::{Error, Result};

/// Tightest level: prefix operators.
pub const UNARY_LEVEL: u8 = 2;

/// Level of the `?:` operator.
pub const TERNARY_LEVEL: u8 = 13;

/// Loosest binary level; the operand level of a comma sequence.
pub const ASSIGNMENT_LEVEL: u8 = 14;

/// Level of the `,` sequence operator.
pub const SEQUENCE_LEVEL: u8 = 15;

/// Operator tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `!` logical not
    Not,
    /// `~` bitwise not
    BitNot,
    /// unary `-`
    Negative,
    /// unary `+`
    Positive,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Mod,
    /// binary `+`
    Plus,
    /// binary `-`
    Minus,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `&`
    And,
    /// `^`
    Xor,
    /// `|`
    Or,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `?`
    Ternary,
    /// `=`
    Assign,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    MultiplyEq,
    /// `/=`
    DivideEq,
    /// `%=`
    ModEq,
    /// `&=`
    AndEq,
    /// `^=`
    XorEq,
    /// `|=`
    OrEq,
    /// `<<=`
    ShiftLeftEq,
    /// `>>=`
    ShiftRightEq,
    /// `,`
    Comma,
}

/// One row of the operator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// Operator tag.
    pub op: Operator,
    /// Source text.
    pub text: &'static str,
    /// Precedence level, 2 (tightest) to 15 (loosest).
    pub level: u8,
}

const fn info(op: Operator, text: &'static str, level: u8) -> OperatorInfo {
    OperatorInfo { op, text, level }
}

/// The operator table, ordered by level.
///
/// `+` and `-` appear twice: once as prefix operators at level 2 and once as
/// binary operators at level 4.
pub static OPERATORS: [OperatorInfo; 35] = [
    info(Operator::Not, "!", 2),
    info(Operator::BitNot, "~", 2),
    info(Operator::Negative, "-", 2),
    info(Operator::Positive, "+", 2),
    info(Operator::Multiply, "*", 3),
    info(Operator::Divide, "/", 3),
    info(Operator::Mod, "%", 3),
    info(Operator::Plus, "+", 4),
    info(Operator::Minus, "-", 4),
    info(Operator::ShiftLeft, "<<", 5),
    info(Operator::ShiftRight, ">>", 5),
    info(Operator::Less, "<", 6),
    info(Operator::LessEq, "<=", 6),
    info(Operator::Greater, ">", 6),
    info(Operator::GreaterEq, ">=", 6),
    info(Operator::Equal, "==", 7),
    info(Operator::NotEqual, "!=", 7),
    info(Operator::And, "&", 8),
    info(Operator::Xor, "^", 9),
    info(Operator::Or, "|", 10),
    info(Operator::AndAnd, "&&", 11),
    info(Operator::OrOr, "||", 12),
    info(Operator::Ternary, "?", 13),
    info(Operator::Assign, "=", 14),
    info(Operator::PlusEq, "+=", 14),
    info(Operator::MinusEq, "-=", 14),
    info(Operator::MultiplyEq, "*=", 14),
    info(Operator::DivideEq, "/=", 14),
    info(Operator::ModEq, "%=", 14),
    info(Operator::AndEq, "&=", 14),
    info(Operator::XorEq, "^=", 14),
    info(Operator::OrEq, "|=", 14),
    info(Operator::ShiftLeftEq, "<<=", 14),
    info(Operator::ShiftRightEq, ">>=", 14),
    info(Operator::Comma, ",", 15),
];

impl Operator {
    /// Looks up the first operator spelled `text`.
    ///
    /// For `+` and `-` that is the prefix form.
    pub fn from_text(text: &str) -> Result<Operator> {
        OPERATORS
            .iter()
            .find(|info| info.text == text)
            .map(|info| info.op)
            .ok_or_else(|| Error::new(format!("Unknown operator {}", text)))
    }

    /// Looks up the operator spelled `text` at exactly `level`.
    pub fn at_level(text: &str, level: u8) -> Option<Operator> {
        OPERATORS
            .iter()
            .find(|info| info.level == level && info.text == text)
            .map(|info| info.op)
    }

    fn info(self) -> &'static OperatorInfo {
        // One row per variant, in declaration order.
        &OPERATORS[self as usize]
    }

    /// Source text of the operator.
    pub fn text(self) -> &'static str {
        self.info().text
    }

    /// Precedence level of the operator.
    pub fn level(self) -> u8 {
        self.info().level
    }

    /// True for `=` and the compound assignments.
    pub fn is_assignment(self) -> bool {
        self.level() == ASSIGNMENT_LEVEL
    }

    /// True for the prefix operators.
    pub fn is_unary(self) -> bool {
        self.level() == UNARY_LEVEL
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
