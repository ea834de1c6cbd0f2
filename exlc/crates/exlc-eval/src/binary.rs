//! Binary operator evaluation.
//!
//! Operands are first promoted to a common [`ValueKind`]; the operator is
//! then applied in that domain.
//!
//! | Domain | Legal operators |
//! |--------|-----------------|
//! | string | `+` (concatenation), `< <= > >= == !=` |
//! | number | `* / % + -`, `<< >> & ^ \|`, `< <= > >= == !=`, `&& \|\|` |
//! | boolean | `== != && \|\|` |
//!
//! `%`, the shifts and the bitwise operators work on operands truncated to
//! 32-bit integers. Comparisons and the logical operators produce booleans.

use exlc_par::value::truncate_int32;
use exlc_par::{Operator, Value, ValueKind};
use exlc_util::{Error, Result};

use crate::Context;

impl Context {
    /// Applies a binary operator to already evaluated operands.
    ///
    /// If either operand is unknown the result is unknown and the operator is
    /// not applied.
    ///
    /// # Example
    /// ```
    /// use exlc_eval::Context;
    /// use exlc_par::{Operator, Value};
    ///
    /// let v = Context::eval_binary(Operator::Plus, &Value::from("n="), &Value::from(4.0)).unwrap();
    /// assert_eq!(v, Value::from("n=4"));
    ///
    /// let v = Context::eval_binary(Operator::Less, &Value::from(true), &Value::from(2.0)).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    /// ```
    pub fn eval_binary(op: Operator, left: &Value, right: &Value) -> Result<Value> {
        match ValueKind::promote(left.kind(), right.kind()) {
            ValueKind::Unknown => Ok(Value::Unknown),
            ValueKind::String => string_op(op, &left.to_text(), &right.to_text()),
            ValueKind::Number => number_op(op, left.to_number()?, right.to_number()?),
            ValueKind::Boolean => boolean_op(op, left.to_bool(), right.to_bool()),
        }
    }
}

fn invalid(op: Operator, domain: &str) -> Error {
    Error::new(format!("Invalid operation ({}) on {}", op, domain))
}

fn string_op(op: Operator, left: &str, right: &str) -> Result<Value> {
    let result = match op {
        Operator::Plus => Value::String(format!("{}{}", left, right)),
        Operator::Less => Value::Boolean(left < right),
        Operator::LessEq => Value::Boolean(left <= right),
        Operator::Greater => Value::Boolean(left > right),
        Operator::GreaterEq => Value::Boolean(left >= right),
        Operator::Equal => Value::Boolean(left == right),
        Operator::NotEqual => Value::Boolean(left != right),
        _ => return Err(invalid(op, "strings")),
    };
    Ok(result)
}

fn number_op(op: Operator, left: f64, right: f64) -> Result<Value> {
    let (l, r) = (truncate_int32(left), truncate_int32(right));

    let result = match op {
        Operator::Multiply => Value::Number(left * right),
        Operator::Divide => Value::Number(left / right),
        Operator::Mod => Value::Number(match r {
            0 => f64::NAN,
            _ => f64::from(l.wrapping_rem(r)),
        }),
        Operator::Plus => Value::Number(left + right),
        Operator::Minus => Value::Number(left - right),
        // Shift counts are taken modulo 32.
        Operator::ShiftLeft => Value::Number(f64::from(l.wrapping_shl(r as u32))),
        Operator::ShiftRight => Value::Number(f64::from(l.wrapping_shr(r as u32))),
        Operator::Less => Value::Boolean(left < right),
        Operator::LessEq => Value::Boolean(left <= right),
        Operator::Greater => Value::Boolean(left > right),
        Operator::GreaterEq => Value::Boolean(left >= right),
        Operator::Equal => Value::Boolean(left == right),
        Operator::NotEqual => Value::Boolean(left != right),
        Operator::And => Value::Number(f64::from(l & r)),
        Operator::Xor => Value::Number(f64::from(l ^ r)),
        Operator::Or => Value::Number(f64::from(l | r)),
        // Both operands are always evaluated; there is no short circuit.
        Operator::AndAnd => Value::Boolean(left != 0.0 && right != 0.0),
        Operator::OrOr => Value::Boolean(left != 0.0 || right != 0.0),
        _ => return Err(invalid(op, "numbers")),
    };
    Ok(result)
}

fn boolean_op(op: Operator, left: bool, right: bool) -> Result<Value> {
    let result = match op {
        Operator::Equal => left == right,
        Operator::NotEqual => left != right,
        Operator::AndAnd => left && right,
        Operator::OrOr => left || right,
        _ => return Err(invalid(op, "Boolean values")),
    };
    Ok(Value::Boolean(result))
}
