//! Error-accumulating type checker.
//!
//! Assigns one of [`Type::Int`], [`Type::Bool`] or [`Type::String`] to a tree,
//! or returns every violated constraint in it. Unlike `?`-style checking,
//! a failure in one operand never hides a failure in its sibling:
//!
//! ```
//! use arbor_core::analyzer::{TypeEnv, type_check};
//! use arbor_core::ir::{BinaryOp, Expr};
//!
//! let expr = Expr::binary(
//!     Expr::binary(Expr::int(1), BinaryOp::Add, Expr::bool(true)),
//!     BinaryOp::Mul,
//!     Expr::binary(Expr::bool(false), BinaryOp::And, Expr::int(42)),
//! );
//! let errors = type_check(&expr, &TypeEnv::empty()).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod error;
pub mod validation;


pub use analyzer::Analyzer;
pub use error::{TypeError, TypeErrorKind};
pub use validation::{Checked, TypeErrors, map2, map3};

use tracing::debug;

use crate::{
    ir::{Expr, Type},
    scope::Scope,
};

/// Declared variable types.
pub type TypeEnv = Scope<Type>;

/// Type-check `expr` against `env`, collecting all errors.
pub fn type_check(expr: &Expr, env: &TypeEnv) -> Checked<Type> {
    let result = Analyzer::new(env).analyze(expr);
    match &result {
        Ok(ty) => debug!(%ty, "type check passed"),
        Err(errors) => debug!(errors = errors.len(), "type check failed"),
    }
    result
}
