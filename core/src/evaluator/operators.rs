//! Binary operator semantics over runtime values.
//!
//! Shared by the interpreter and by constant folding, so the two can never
//! disagree about what `1 / 0` or `"a" + "b"` means.

use crate::ir::{BinaryOp, Value};
use crate::{String, evaluator::RuntimeError};

/// Apply `op` to two evaluated operands.
///
/// | Operands | Operators | Result |
/// |---|---|---|
/// | Int, Int | `+ - * /` | Int (wrapping) |
/// | Int, Int | `< <= > >=` | Bool |
/// | Bool, Bool | `&& \|\|` | Bool |
/// | Str, Str | `+` | Str (concatenation) |
/// | same type | `== !=` | Bool (structural) |
///
/// Anything else is `InvalidOperands`.
pub fn apply_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    use BinaryOp::*;

    match (left, right) {
        (Value::Int(l), Value::Int(r)) => match op {
            Add | Sub | Mul | Div => eval_binary_int(op, *l, *r).map(Value::Int),
            Lt | Le | Gt | Ge => Ok(Value::Bool(eval_comparison_int(op, *l, *r))),
            Eq => Ok(Value::Bool(l == r)),
            Ne => Ok(Value::Bool(l != r)),
            And | Or => Err(invalid(op, left, right)),
        },
        (Value::Bool(l), Value::Bool(r)) => match op {
            And => Ok(Value::Bool(*l && *r)),
            Or => Ok(Value::Bool(*l || *r)),
            Eq => Ok(Value::Bool(l == r)),
            Ne => Ok(Value::Bool(l != r)),
            Add | Sub | Mul | Div | Lt | Le | Gt | Ge => Err(invalid(op, left, right)),
        },
        (Value::Str(l), Value::Str(r)) => match op {
            Add => {
                let mut joined = String::with_capacity(l.len() + r.len());
                joined.push_str(l);
                joined.push_str(r);
                Ok(Value::Str(joined))
            }
            Eq => Ok(Value::Bool(l == r)),
            Ne => Ok(Value::Bool(l != r)),
            Sub | Mul | Div | Lt | Le | Gt | Ge | And | Or => Err(invalid(op, left, right)),
        },
        _ => Err(invalid(op, left, right)),
    }
}

fn invalid(op: BinaryOp, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::InvalidOperands {
        op,
        left: left.ty(),
        right: right.ty(),
    }
}

/// Integer arithmetic.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
/// Division by zero returns an error.
fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Result<i64, RuntimeError> {
    match op {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                // wrapping_div covers i64::MIN / -1
                Ok(left.wrapping_div(right))
            }
        }
        _ => unreachable!("{op} is not an arithmetic operator"),
    }
}

fn eval_comparison_int(op: BinaryOp, left: i64, right: i64) -> bool {
    match op {
        BinaryOp::Lt => left < right,
        BinaryOp::Le => left <= right,
        BinaryOp::Gt => left > right,
        BinaryOp::Ge => left >= right,
        _ => unreachable!("{op} is not an ordering operator"),
    }
}
