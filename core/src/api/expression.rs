//! Compiled arbor expressions.

use super::{Error, ExecutionOptions};
use crate::evaluator::{Environment, eval_with_limits};
use crate::ir::{Expr, Type, Value};
use crate::{String, Vec, format};

/// A type-checked (and possibly optimized) expression ready for execution.
///
/// A compiled expression owns its tree and can be run any number of times
/// with different arguments.
///
/// # Example
///
/// ```
/// use arbor_core::api::Engine;
/// use arbor_core::analyzer::TypeEnv;
/// use arbor_core::evaluator::Environment;
/// use arbor_core::ir::{BinaryOp, Expr, Type, Value};
///
/// let engine = Engine::default();
/// let params = TypeEnv::empty().bind("n", Type::Int);
/// let expr = Expr::binary(Expr::var("n"), BinaryOp::Mul, Expr::int(2));
/// let compiled = engine.compile(expr, &params).unwrap();
///
/// for n in 1..4 {
///     let args = Environment::empty().bind("n", Value::Int(n));
///     assert_eq!(compiled.run(&args).unwrap(), Value::Int(n * 2));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CompiledExpression {
    expr: Expr,
    return_type: Type,
    /// Parameters the caller must bind, sorted by name.
    params: Vec<(String, Type)>,
    globals: Environment,
    options: ExecutionOptions,
}

impl CompiledExpression {
    /// Create a new compiled expression.
    ///
    /// This is called internally by Engine::compile().
    pub(crate) fn new(
        expr: Expr,
        return_type: Type,
        params: Vec<(String, Type)>,
        globals: Environment,
        options: ExecutionOptions,
    ) -> Self {
        Self {
            expr,
            return_type,
            params,
            globals,
            options,
        }
    }

    /// Execute with the engine's default execution options.
    pub fn run(&self, args: &Environment) -> Result<Value, Error> {
        self.run_with_options(&self.options, args)
    }

    /// Execute the expression with runtime validation.
    ///
    /// Every parameter must be bound in `args` to a value of its declared
    /// type; otherwise this returns [`Error::Api`] without evaluating.
    /// Extra bindings in `args` are ignored.
    pub fn run_with_options(
        &self,
        options: &ExecutionOptions,
        args: &Environment,
    ) -> Result<Value, Error> {
        let mut bound = Vec::with_capacity(self.params.len());
        for (name, expected_ty) in &self.params {
            let Some(value) = args.lookup(name) else {
                return Err(Error::Api(format!("Missing argument for parameter '{name}'")));
            };
            if value.ty() != *expected_ty {
                return Err(Error::Api(format!(
                    "Type mismatch for parameter '{name}': expected {expected_ty}, got {}",
                    value.ty()
                )));
            }
            bound.push((name.as_str(), value.clone()));
        }
        let env = self.globals.extend(bound);

        Ok(eval_with_limits(&self.expr, &env, options.max_depth)?)
    }

    /// The tree that will be evaluated.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn return_type(&self) -> Type {
        self.return_type
    }

    pub fn params(&self) -> &[(String, Type)] {
        &self.params
    }
}
