use crate::{Box, String, ToString};

use super::{BinaryOp, Value};

/// An expression tree node.
///
/// The union is closed: every structural recursion in this crate matches all
/// four variants without a wildcard arm, so adding a variant is a compile
/// error at each of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(Value),
    Variable(String),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    Conditional {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn int(n: i64) -> Self {
        Expr::Literal(Value::Int(n))
    }

    pub fn bool(b: bool) -> Self {
        Expr::Literal(Value::Bool(b))
    }

    pub fn str(s: impl Into<String>) -> Self {
        Expr::Literal(Value::Str(s.into()))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn conditional(cond: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::Conditional {
            cond: Box::new(cond),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    /// Fully parenthesized rendering; same text as `Display`.
    pub fn format(&self) -> String {
        self.to_string()
    }

    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Expr::Literal(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => true,
            Expr::Binary { .. } | Expr::Conditional { .. } => false,
        }
    }

    /// Variant name, used in logs and counts.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Literal(_) => "Literal",
            Expr::Variable(_) => "Variable",
            Expr::Binary { .. } => "Binary",
            Expr::Conditional { .. } => "Conditional",
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Literal(value)
    }
}
