//! Arbor - expression trees with a checker, an optimizer and an interpreter
//!
//! # Overview
//!
//! Arbor works on a small, closed expression IR: literals, variables, binary
//! operations and conditionals. On top of it sit:
//!
//! - a **type checker** that reports every violated constraint, not just the first
//! - a **fixed-point optimizer** (constant folding, identity simplification,
//!   dead-branch elimination)
//! - a **tree-walking interpreter** with an immutable, scoped environment
//! - **traversal utilities** for rewriting and folding trees
//!
//! # Quick Start
//!
//! ```
//! use arbor::{BinaryOp, Engine, EngineOptions, Environment, Expr, Type, TypeEnv, Value};
//!
//! let engine = Engine::new(EngineOptions::default(), |env| {
//!     env.register("scale", Value::Int(10));
//! });
//!
//! // (x + 0) * scale
//! let expr = Expr::binary(
//!     Expr::binary(Expr::var("x"), BinaryOp::Add, Expr::int(0)),
//!     BinaryOp::Mul,
//!     Expr::var("scale"),
//! );
//!
//! let params = TypeEnv::empty().bind("x", Type::Int);
//! let compiled = engine.compile(expr, &params).unwrap();
//! assert_eq!(compiled.expr().to_string(), "(x * scale)");
//!
//! let args = Environment::empty().bind("x", Value::Int(4));
//! assert_eq!(compiled.run(&args).unwrap(), Value::Int(40));
//! ```
//!
//! # Lower-level passes
//!
//! Each stage is also usable on its own:
//!
//! ```
//! use arbor::{BinaryOp, Expr, TypeEnv, optimise, type_check};
//!
//! let expr = Expr::binary(Expr::int(2), BinaryOp::Mul, Expr::int(21));
//! assert_eq!(optimise(expr.clone()), Expr::int(42));
//! assert!(type_check(&expr, &TypeEnv::empty()).is_ok());
//! ```

// Re-export public API from arbor_core
pub use arbor_core::api::{
    CompilationOptions, CompiledExpression, Diagnostic, Engine, EngineOptions, EnvironmentBuilder,
    Error, ExecutionOptions, OptimizerOptions, Severity,
};

// Re-export the IR and the passes
pub use arbor_core::analyzer::{Checked, TypeEnv, TypeError, TypeErrorKind, TypeErrors, type_check};
pub use arbor_core::evaluator::{EvalError, Environment, eval_with_limits, evaluate};
pub use arbor_core::ir::{BinaryOp, Expr, Type, Value};
pub use arbor_core::optimizer::{OptimizeStats, Optimizer, Rule, optimise, optimise_with_stats};
pub use arbor_core::scope::Scope;
pub use arbor_core::{analyzer, evaluator, ir, optimizer, visitor};

#[cfg(feature = "parallel")]
pub use arbor_core::parallel;

// Error rendering
mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
