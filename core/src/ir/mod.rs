//! Intermediate Representation (IR) for arbor expressions.
//!
//! The IR is a closed, four-variant expression tree:
//!
//! - **Literal**: a constant [`Value`] (integer, boolean or string)
//! - **Variable**: a reference to a name bound by the caller
//! - **Binary**: `left op right` for every [`BinaryOp`]
//! - **Conditional**: `if cond then a else b`
//!
//! Trees are immutable once built. Every pass in this crate consumes or borrows
//! a tree and produces a new one; equality is deep and structural, which is
//! what the optimizer's fixed-point loop relies on.

pub mod display;
pub mod expr;
pub mod ops;
pub mod ty;
pub mod value;

pub use display::escape_str;
pub use expr::Expr;
pub use ops::{BinaryOp, OpClass};
pub use ty::Type;
pub use value::Value;
