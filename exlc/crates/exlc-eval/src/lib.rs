//! exlc-eval - Tree-walking evaluator for the exl expression language
//!
//! This crate evaluates an [`Expr`] tree to a [`Value`]. Evaluation is a
//! pure function of the tree: there are no variables, so nothing outside the
//! returned value changes.
//!
//! # Example Usage
//!
//! ```
//! use exlc_eval::{eval_str, Context};
//! use exlc_par::{parse_str, Value};
//!
//! assert_eq!(eval_str("2 * 4 + 5").unwrap(), Value::Number(13.0));
//!
//! let expr = parse_str("'foo' + 'bar'").unwrap();
//! let value = Context::new().evaluate(&expr).unwrap();
//! assert_eq!(value, Value::from("foobar"));
//! ```
//!
//! # Type Promotion
//!
//! Both operands of a binary operator are converted to a common kind first:
//! unknown beats string, string beats number, number beats boolean. Which
//! operators are legal then depends on that kind; see [`Context::eval_binary`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod binary;
pub mod context;
pub mod unary;

#[cfg(test)]
mod edge_cases;

use exlc_par::parse_str;
use exlc_util::Result;
use tracing::debug;

pub use context::Context;
pub use exlc_par::{Expr, Value, ValueKind};

/// Parses and evaluates `text` in a fresh [`Context`].
pub fn eval_str(text: &str) -> Result<Value> {
    let expr = parse_str(text)?;
    let value = Context::new().evaluate(&expr)?;
    debug!(expr = %expr, value = %value, "evaluated expression");
    Ok(value)
}
