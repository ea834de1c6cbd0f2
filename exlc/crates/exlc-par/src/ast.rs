//! Abstract Syntax Tree definitions for exl expressions.
//!
//! The tree is closed over five node shapes. Each node owns its children, so
//! dropping the root drops the whole tree.
//!
//! Every node prints as a fully parenthesised, source-like text:
//!
//! | Node | Printed form |
//! |------|--------------|
//! | Constant | `6`, `"text"`, `true` |
//! | Unary | `(-x)` |
//! | Binary | `(a+b)` |
//! | Ternary | `(t?p:n)` |
//! | Sequence | `a,b,c` (parenthesised when nested as an operand or item) |
//!
//! The printed text always lexes and parses again, back to the same tree.

use std::fmt;

use crate::ops::Operator;
use crate::value::Value;

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal value.
    Constant(Value),

    /// Prefix operator applied to one operand.
    Unary(UnaryExpr),

    /// Infix operator applied to two operands.
    Binary(BinaryExpr),

    /// `test ? positive : negative`
    Ternary(TernaryExpr),

    /// Comma-separated expressions; evaluates to the last one.
    Sequence(Vec<Expr>),
}

/// Unary expression
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    /// One of the level 2 operators.
    pub op: Operator,
    /// Operand.
    pub operand: Box<Expr>,
}

/// Binary expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    /// Operator from levels 3 to 12 or 14.
    pub op: Operator,
    /// Left operand.
    pub left: Box<Expr>,
    /// Right operand.
    pub right: Box<Expr>,
}

/// Ternary expression
#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    /// Condition.
    pub test: Box<Expr>,
    /// Value when the condition holds.
    pub positive: Box<Expr>,
    /// Value otherwise.
    pub negative: Box<Expr>,
}

impl Expr {
    /// Constant node.
    pub fn constant(value: impl Into<Value>) -> Expr {
        Expr::Constant(value.into())
    }

    /// Unary node.
    pub fn unary(op: Operator, operand: Expr) -> Expr {
        Expr::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
        })
    }

    /// Binary node.
    pub fn binary(op: Operator, left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Ternary node.
    pub fn ternary(test: Expr, positive: Expr, negative: Expr) -> Expr {
        Expr::Ternary(TernaryExpr {
            test: Box::new(test),
            positive: Box::new(positive),
            negative: Box::new(negative),
        })
    }

    /// Number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + match self {
            Expr::Constant(_) => 0,
            Expr::Unary(u) => u.operand.node_count(),
            Expr::Binary(b) => b.left.node_count() + b.right.node_count(),
            Expr::Ternary(t) => {
                t.test.node_count() + t.positive.node_count() + t.negative.node_count()
            },
            Expr::Sequence(items) => items.iter().map(Expr::node_count).sum(),
        }
    }
}

/// Prints `expr` as an operand of an enclosing operator.
fn fmt_operand(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::Sequence(_) => write!(f, "({})", expr),
        _ => write!(f, "{}", expr),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{}", value),
            Expr::Unary(u) => {
                write!(f, "({}", u.op)?;
                fmt_operand(f, &u.operand)?;
                f.write_str(")")
            },
            Expr::Binary(b) => {
                f.write_str("(")?;
                fmt_operand(f, &b.left)?;
                write!(f, "{}", b.op)?;
                fmt_operand(f, &b.right)?;
                f.write_str(")")
            },
            Expr::Ternary(t) => {
                f.write_str("(")?;
                fmt_operand(f, &t.test)?;
                write!(f, "?{}:{})", t.positive, t.negative)
            },
            Expr::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    fmt_operand(f, item)?;
                }
                Ok(())
            },
        }
    }
}
