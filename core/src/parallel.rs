//! Data-parallel fan-out over independent trees and subtrees.
//!
//! Trees are immutable, so checking or optimizing them concurrently needs no
//! locking. Results are joined with the same accumulation law as the
//! sequential checker, so error order does not depend on scheduling.

use rayon::prelude::*;

use crate::analyzer::analyzer::{binary_type, conditional_type, literal_type, variable_type};
use crate::analyzer::{Checked, TypeEnv, map2, map3};
use crate::ir::{Expr, Type};
use crate::optimizer::optimise;
use crate::Vec;

/// Type-check many unrelated trees at once. Results keep input order.
pub fn check_all(exprs: &[Expr], env: &TypeEnv) -> Vec<Checked<Type>> {
    exprs
        .par_iter()
        .map(|expr| crate::analyzer::type_check(expr, env))
        .collect()
}

/// Optimise many unrelated trees at once. Results keep input order.
pub fn optimise_all(exprs: Vec<Expr>) -> Vec<Expr> {
    exprs.into_par_iter().map(optimise).collect()
}

/// Type-check one tree, checking sibling subtrees concurrently.
///
/// Produces exactly the result of [`crate::analyzer::type_check`],
/// including the order of accumulated errors.
pub fn type_check(expr: &Expr, env: &TypeEnv) -> Checked<Type> {
    match expr {
        Expr::Literal(value) => Ok(literal_type(value)),

        Expr::Variable(name) => variable_type(env, name),

        Expr::Binary { left, op, right } => {
            let (left, right) = rayon::join(|| type_check(left, env), || type_check(right, env));
            map2(left, right, |l, r| (l, r)).and_then(|(l, r)| binary_type(*op, l, r))
        }

        Expr::Conditional {
            cond,
            then_branch,
            else_branch,
        } => {
            let (cond, (then_ty, else_ty)) = rayon::join(
                || type_check(cond, env),
                || {
                    rayon::join(
                        || type_check(then_branch, env),
                        || type_check(else_branch, env),
                    )
                },
            );
            map3(cond, then_ty, else_ty, |c, t, e| (c, t, e))
                .and_then(|(c, t, e)| conditional_type(c, t, e))
        }
    }
}
