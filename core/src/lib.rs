#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod analyzer;
pub mod api;
pub mod evaluator;
pub mod ir;
pub mod optimizer;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod scope;
pub mod visitor;

pub use analyzer::{Checked, TypeEnv, TypeError, TypeErrors, type_check};
pub use evaluator::{EvalError, Environment, evaluate};
pub use ir::{BinaryOp, Expr, Type, Value};
pub use optimizer::optimise;
