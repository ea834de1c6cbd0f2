//! Prefix operator evaluation.

use exlc_par::{Operator, Value};
use exlc_util::{Error, Result};

use crate::Context;

impl Context {
    /// Applies a prefix operator to an already evaluated operand.
    ///
    /// - `!` gives the logical negation of the operand's truth reading.
    /// - `~` negates a boolean logically and complements anything else as a
    ///   32-bit integer.
    /// - `-` and `+` read the operand as a number.
    ///
    /// An unknown operand stays unknown.
    ///
    /// # Example
    /// ```
    /// use exlc_eval::Context;
    /// use exlc_par::{Operator, Value};
    ///
    /// let v = Context::eval_unary(Operator::BitNot, &Value::Number(1.0)).unwrap();
    /// assert_eq!(v, Value::Number(-2.0));
    ///
    /// let v = Context::eval_unary(Operator::Negative, &Value::from("2.5")).unwrap();
    /// assert_eq!(v, Value::Number(-2.5));
    /// ```
    pub fn eval_unary(op: Operator, operand: &Value) -> Result<Value> {
        if operand.is_unknown() {
            return Ok(Value::Unknown);
        }

        match op {
            Operator::Not => Ok(Value::Boolean(!operand.to_bool())),
            Operator::BitNot => match operand {
                Value::Boolean(b) => Ok(Value::Boolean(!b)),
                _ => Ok(Value::Number(f64::from(!operand.to_int32()?))),
            },
            Operator::Negative => Ok(Value::Number(-operand.to_number()?)),
            Operator::Positive => Ok(Value::Number(operand.to_number()?)),
            _ => Err(Error::new(format!("Unknown unary operator {}", op))),
        }
    }
}
