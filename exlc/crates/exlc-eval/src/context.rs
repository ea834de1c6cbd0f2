//! Evaluation context and node dispatch.

use exlc_par::ast::TernaryExpr;
use exlc_par::{Expr, Value};
use exlc_util::{Error, Result};

/// Runtime state threaded through evaluation.
///
/// The language has no variables, so a context carries no state.
#[derive(Debug, Clone, Default)]
pub struct Context {}

impl Context {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Evaluates `expr` to a value.
    ///
    /// The first failing sub-expression aborts the whole evaluation.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Constant(value) => Ok(value.clone()),
            Expr::Unary(u) => {
                let operand = self.evaluate(&u.operand)?;
                Self::eval_unary(u.op, &operand)
            },
            Expr::Binary(b) => {
                // Assignments have no lvalue to store into.
                if b.op.is_assignment() {
                    return Err(Error::new(format!("Not implemented: {}", b.op)));
                }
                let left = self.evaluate(&b.left)?;
                let right = self.evaluate(&b.right)?;
                Self::eval_binary(b.op, &left, &right)
            },
            Expr::Ternary(t) => self.eval_ternary(t),
            Expr::Sequence(items) => self.eval_sequence(items),
        }
    }

    /// Evaluates the test, then exactly one branch.
    fn eval_ternary(&mut self, ternary: &TernaryExpr) -> Result<Value> {
        if self.evaluate(&ternary.test)?.to_bool() {
            self.evaluate(&ternary.positive)
        } else {
            self.evaluate(&ternary.negative)
        }
    }

    /// Evaluates every item left to right and keeps the last value.
    fn eval_sequence(&mut self, items: &[Expr]) -> Result<Value> {
        let mut last = None;
        for item in items {
            last = Some(self.evaluate(item)?);
        }
        last.ok_or_else(|| Error::new("Attempt to execute an empty sequence"))
    }
}
