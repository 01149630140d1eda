//! Tree-walking interpreter.
//!
//! Evaluates an [`Expr`] directly against an immutable [`Environment`].
//!
//! ## Design Principles
//!
//! - **Never panic**: ill-typed trees and missing bindings are errors, not crashes
//! - **Stack-safe**: depth tracking stops runaway nesting before the native stack does
//! - **Lazy branches**: a conditional evaluates exactly one of its branches
//!
//! ## Example
//!
//! ```
//! use arbor_core::evaluator::{Environment, evaluate};
//! use arbor_core::ir::{BinaryOp, Expr, Value};
//!
//! let env = Environment::empty().bind("x", Value::Int(40));
//! let expr = Expr::binary(Expr::var("x"), BinaryOp::Add, Expr::int(2));
//! assert_eq!(evaluate(&expr, &env), Ok(Value::Int(42)));
//! ```

mod error;
mod eval;
pub mod operators;


pub use error::{EvalError, ResourceExceeded, RuntimeError};

use tracing::debug;

use crate::{
    ir::{Expr, Value},
    scope::Scope,
};

/// Runtime bindings from variable name to value.
pub type Environment = Scope<Value>;

/// Default maximum evaluation depth.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Evaluate an expression with the default depth limit.
pub fn evaluate(expr: &Expr, env: &Environment) -> Result<Value, EvalError> {
    eval_with_limits(expr, env, DEFAULT_MAX_DEPTH)
}

/// Evaluate an expression with a custom depth limit.
///
/// Nesting deeper than `max_depth` nodes fails with
/// [`ResourceExceeded::StackOverflow`].
pub fn eval_with_limits(
    expr: &Expr,
    env: &Environment,
    max_depth: usize,
) -> Result<Value, EvalError> {
    debug!(max_depth, "evaluating {}", expr.kind_name());
    eval::Evaluator::new(max_depth).eval_expr(expr, env)
}
