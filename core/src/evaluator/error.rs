//! Evaluation errors.
//!
//! Every error here aborts the evaluation of the whole tree. A tree that
//! passed the type checker cannot produce `InvalidOperands` or
//! `NonBooleanCondition`; `UndefinedVariable` means the environment did not
//! match the typing context the tree was checked against.
//!
//! # Error Categories
//!
//! - **Runtime errors**: the tree asked for something the value domain
//!   cannot do (division by zero, mismatched operands).
//! - **Resource exceeded errors**: the evaluation hit a configured limit.

use thiserror::Error;

use crate::String;
use crate::ir::{BinaryOp, Type};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceeded),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Operator '{op}' cannot be applied to {left} and {right}")]
    InvalidOperands {
        op: BinaryOp,
        left: Type,
        right: Type,
    },

    #[error("Conditional requires Bool condition, got {found}")]
    NonBooleanCondition { found: Type },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceExceeded {
    #[error("Evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}
