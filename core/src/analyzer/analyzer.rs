use tracing::trace;

use super::validation::{Checked, TypeErrors, map2, map3};
use super::{TypeEnv, TypeError, TypeErrorKind};
use crate::ir::{BinaryOp, Expr, OpClass, Type, Value};

/// Structural type checker over a fixed typing context.
///
/// Sibling subtrees are checked independently and their errors are
/// concatenated, so one call reports every violation in the tree.
pub struct Analyzer<'env> {
    env: &'env TypeEnv,
}

impl<'env> Analyzer<'env> {
    pub fn new(env: &'env TypeEnv) -> Self {
        Self { env }
    }

    pub fn analyze(&self, expr: &Expr) -> Checked<Type> {
        let result = match expr {
            Expr::Literal(value) => Ok(literal_type(value)),

            Expr::Variable(name) => variable_type(self.env, name),

            Expr::Binary { left, op, right } => {
                let left = self.analyze(left);
                let right = self.analyze(right);
                map2(left, right, |l, r| (l, r)).and_then(|(l, r)| binary_type(*op, l, r))
            }

            Expr::Conditional {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond = self.analyze(cond);
                let then_ty = self.analyze(then_branch);
                let else_ty = self.analyze(else_branch);
                map3(cond, then_ty, else_ty, |c, t, e| (c, t, e))
                    .and_then(|(c, t, e)| conditional_type(c, t, e))
            }
        };

        trace!(kind = expr.kind_name(), ok = result.is_ok(), "checked node");
        result
    }
}

pub(crate) fn literal_type(value: &Value) -> Type {
    value.ty()
}

pub(crate) fn variable_type(env: &TypeEnv, name: &str) -> Checked<Type> {
    env.lookup(name)
        .copied()
        .ok_or_else(|| TypeError::undefined_variable(name).into())
}

/// Result type of `left op right` once both operands are known to be well typed.
pub(crate) fn binary_type(op: BinaryOp, left: Type, right: Type) -> Checked<Type> {
    let result = match op.class() {
        OpClass::Arithmetic if left == Type::Int && right == Type::Int => Some(Type::Int),
        OpClass::Ordering if left == Type::Int && right == Type::Int => Some(Type::Bool),
        OpClass::Logical if left == Type::Bool && right == Type::Bool => Some(Type::Bool),
        OpClass::Equality if left == right => Some(Type::Bool),
        _ => None,
    };

    result.ok_or_else(|| TypeError::invalid_operands(op, left, right).into())
}

/// Result type of a conditional whose three parts are well typed. Both
/// constraints are checked, so this can report two errors at once. The
/// result is the then-branch type.
pub(crate) fn conditional_type(cond: Type, then_ty: Type, else_ty: Type) -> Checked<Type> {
    let mut errors = crate::Vec::new();
    if cond != Type::Bool {
        errors.push(TypeError::new(TypeErrorKind::ConditionNotBool { found: cond }));
    }
    if then_ty != else_ty {
        errors.push(TypeError::new(TypeErrorKind::BranchMismatch { then_ty, else_ty }));
    }

    match TypeErrors::from_vec(errors) {
        Some(errors) => Err(errors),
        None => Ok(then_ty),
    }
}
