//! Core evaluation logic.

use tracing::trace;

use crate::{
    evaluator::{Environment, EvalError, ResourceExceeded::*, RuntimeError::*, operators},
    ir::{Expr, Value},
};

/// Tree-walking evaluator. Holds only the depth budget; the environment is
/// passed down by reference and never changed.
pub struct Evaluator {
    max_depth: usize,
    depth: usize,
}

impl Evaluator {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth: 0,
        }
    }

    /// Evaluate an expression node.
    pub fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> Result<Value, EvalError> {
        // Entering this node would be level `depth + 1`.
        if self.depth >= self.max_depth {
            return Err(StackOverflow {
                depth: self.depth + 1,
                max_depth: self.max_depth,
            }
            .into());
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr, env);
        self.depth -= 1;

        result
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &Environment) -> Result<Value, EvalError> {
        trace!(depth = self.depth, kind = expr.kind_name(), "eval");

        match expr {
            Expr::Literal(value) => Ok(value.clone()),

            Expr::Variable(name) => match env.lookup(name) {
                Some(value) => Ok(value.clone()),
                None => Err(UndefinedVariable { name: name.clone() }.into()),
            },

            Expr::Binary { left, op, right } => {
                // Both operands, left first. `&&` and `||` do not short-circuit.
                let left_val = self.eval_expr(left, env)?;
                let right_val = self.eval_expr(right, env)?;
                Ok(operators::apply_binary(*op, &left_val, &right_val)?)
            }

            Expr::Conditional {
                cond,
                then_branch,
                else_branch,
            } => {
                // Only the chosen branch is evaluated.
                match self.eval_expr(cond, env)? {
                    Value::Bool(true) => self.eval_expr(then_branch, env),
                    Value::Bool(false) => self.eval_expr(else_branch, env),
                    other => Err(NonBooleanCondition { found: other.ty() }.into()),
                }
            }
        }
    }
}
