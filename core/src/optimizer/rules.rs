//! Local rewrite rules.
//!
//! Each rule looks at a single node, whose children have already been
//! rewritten, and returns it unchanged when it does not apply. None of them
//! can fail.

use core::fmt;

use tracing::trace;

use crate::evaluator::operators::apply_binary;
use crate::ir::{BinaryOp, Expr, Value};

/// One of the three optimizer passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    ConstantFolding,
    IdentitySimplification,
    DeadBranchElimination,
}

impl Rule {
    /// All rules, in the order they run at each node.
    pub const ALL: [Rule; 3] = [
        Rule::ConstantFolding,
        Rule::IdentitySimplification,
        Rule::DeadBranchElimination,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::ConstantFolding => "constant-folding",
            Rule::IdentitySimplification => "identity-simplification",
            Rule::DeadBranchElimination => "dead-branch-elimination",
        }
    }

    pub fn apply(self, expr: Expr) -> Expr {
        match self {
            Rule::ConstantFolding => fold_constants(expr),
            Rule::IdentitySimplification => simplify_identities(expr),
            Rule::DeadBranchElimination => eliminate_dead_branches(expr),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `Binary(Literal, op, Literal)` becomes the literal result of `op`.
///
/// Uses the interpreter's operator table. Operands it rejects (division by
/// zero, mismatched types) leave the node as it was.
pub fn fold_constants(expr: Expr) -> Expr {
    let folded = match &expr {
        Expr::Binary { left, op, right } => match (left.as_literal(), right.as_literal()) {
            (Some(l), Some(r)) => apply_binary(*op, l, r).ok(),
            _ => None,
        },
        Expr::Literal(_) | Expr::Variable(_) | Expr::Conditional { .. } => None,
    };

    match folded {
        Some(value) => {
            trace!(rule = "constant-folding", "{expr} => {value}");
            Expr::Literal(value)
        }
        None => expr,
    }
}

/// What an identity pattern reduces its node to.
enum Reduction {
    /// The non-literal operand.
    Operand,
    /// A fixed literal, discarding both operands.
    Constant(Value),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// The identity table. `side` is where the literal sits.
fn identity(op: BinaryOp, constant: &Value, side: Side) -> Option<Reduction> {
    use BinaryOp::*;

    match (op, constant) {
        // x + 0, 0 + x
        (Add, Value::Int(0)) => Some(Reduction::Operand),
        // x - 0
        (Sub, Value::Int(0)) if side == Side::Right => Some(Reduction::Operand),
        // x * 1, 1 * x
        (Mul, Value::Int(1)) => Some(Reduction::Operand),
        // x * 0, 0 * x
        (Mul, Value::Int(0)) => Some(Reduction::Constant(Value::Int(0))),
        // x / 1
        (Div, Value::Int(1)) if side == Side::Right => Some(Reduction::Operand),
        // x && true, true && x
        (And, Value::Bool(true)) => Some(Reduction::Operand),
        // x || false, false || x
        (Or, Value::Bool(false)) => Some(Reduction::Operand),
        // x && false, false && x
        (And, Value::Bool(false)) => Some(Reduction::Constant(Value::Bool(false))),
        // x || true, true || x
        (Or, Value::Bool(true)) => Some(Reduction::Constant(Value::Bool(true))),
        _ => None,
    }
}

/// Algebraic identities against a literal operand: `x + 0 → x`,
/// `x * 0 → 0`, `true && x → x` and the rest of the table in [`identity`].
///
/// A literal on the right is tried before a literal on the left.
pub fn simplify_identities(expr: Expr) -> Expr {
    match expr {
        Expr::Binary { left, op, right } => {
            let on_right = right.as_literal().and_then(|c| identity(op, c, Side::Right));
            let reduction = match on_right {
                Some(reduction) => Some((reduction, Side::Right)),
                None => left
                    .as_literal()
                    .and_then(|c| identity(op, c, Side::Left))
                    .map(|reduction| (reduction, Side::Left)),
            };

            match reduction {
                Some((Reduction::Operand, Side::Right)) => {
                    trace!(rule = "identity-simplification", "x {op} {right} => x");
                    *left
                }
                Some((Reduction::Operand, Side::Left)) => {
                    trace!(rule = "identity-simplification", "{left} {op} x => x");
                    *right
                }
                Some((Reduction::Constant(value), _)) => {
                    trace!(
                        rule = "identity-simplification",
                        "({left} {op} {right}) => {value}"
                    );
                    Expr::Literal(value)
                }
                None => Expr::Binary { left, op, right },
            }
        }
        Expr::Literal(_) | Expr::Variable(_) | Expr::Conditional { .. } => expr,
    }
}

/// `if true then t else e` becomes `t`; `if false then t else e` becomes `e`.
pub fn eliminate_dead_branches(expr: Expr) -> Expr {
    match expr {
        Expr::Conditional {
            cond,
            then_branch,
            else_branch,
        } => match *cond {
            Expr::Literal(Value::Bool(b)) => {
                trace!(rule = "dead-branch-elimination", "condition is {b}");
                if b { *then_branch } else { *else_branch }
            }
            cond => Expr::Conditional {
                cond: crate::Box::new(cond),
                then_branch,
                else_branch,
            },
        },
        Expr::Literal(_) | Expr::Variable(_) | Expr::Binary { .. } => expr,
    }
}
