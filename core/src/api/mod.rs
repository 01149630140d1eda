//! Public API for compiling and running arbor expressions.
//!
//! The pipeline is: type-check (every error becomes a [`Diagnostic`]),
//! optionally optimize, then evaluate with validated arguments.
//!
//! # Example
//!
//! ```
//! use arbor_core::api::{Engine, Error};
//! use arbor_core::analyzer::TypeEnv;
//! use arbor_core::ir::{BinaryOp, Expr};
//!
//! let engine = Engine::default();
//! let bad = Expr::binary(Expr::int(1), BinaryOp::And, Expr::bool(true));
//!
//! match engine.compile(bad, &TypeEnv::empty()) {
//!     Err(Error::Compilation { diagnostics }) => assert_eq!(diagnostics.len(), 1),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod engine;
pub mod environment;
pub mod error;
pub mod expression;
pub mod options;

#[cfg(test)]
mod api_test;

pub use engine::Engine;
pub use environment::EnvironmentBuilder;
pub use error::{Diagnostic, Error, Severity};
pub use expression::CompiledExpression;
pub use options::{CompilationOptions, EngineOptions, ExecutionOptions, OptimizerOptions};
