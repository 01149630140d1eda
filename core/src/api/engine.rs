//! The arbor compilation engine.

use tracing::debug;

use super::environment::types_of;
use super::{CompilationOptions, CompiledExpression, EngineOptions, EnvironmentBuilder, Error};
use crate::analyzer::{self, TypeEnv};
use crate::evaluator::Environment;
use crate::ir::{Expr, Type};
use crate::optimizer::Optimizer;
use crate::visitor::variables;
use crate::{String, Vec};

/// The arbor compilation and execution engine.
///
/// The engine manages:
/// - Global environment (constants visible to every expression)
/// - The optimizer configuration
/// - Runtime configuration (EngineOptions)
///
/// # Example
///
/// ```
/// use arbor_core::api::{Engine, EngineOptions};
/// use arbor_core::analyzer::TypeEnv;
/// use arbor_core::evaluator::Environment;
/// use arbor_core::ir::{BinaryOp, Expr, Type, Value};
///
/// let engine = Engine::new(EngineOptions::default(), |env| {
///     env.register("base", Value::Int(40));
/// });
///
/// let params = TypeEnv::empty().bind("x", Type::Int);
/// let expr = Expr::binary(Expr::var("base"), BinaryOp::Add, Expr::var("x"));
/// let compiled = engine.compile(expr, &params).unwrap();
///
/// let args = Environment::empty().bind("x", Value::Int(2));
/// assert_eq!(compiled.run(&args).unwrap(), Value::Int(42));
/// ```
pub struct Engine {
    globals: Environment,
    global_types: TypeEnv,
    optimizer: Optimizer,
    options: EngineOptions,
}

impl Engine {
    /// Create a new engine with a custom environment.
    ///
    /// The initialization closure registers globals on the builder.
    pub fn new(options: EngineOptions, init: impl FnOnce(&mut EnvironmentBuilder)) -> Self {
        let mut env_builder = EnvironmentBuilder::new();
        init(&mut env_builder);
        let globals = env_builder.build();
        let global_types = types_of(&globals);

        Self {
            globals,
            global_types,
            optimizer: Optimizer::new(options.optimizer.clone()),
            options,
        }
    }

    /// Access the global environment.
    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Compile an expression with the engine's default compilation options.
    ///
    /// `params` declares the type of every variable the caller will supply
    /// at run time. Parameters shadow globals of the same name.
    pub fn compile(&self, expr: Expr, params: &TypeEnv) -> Result<CompiledExpression, Error> {
        self.compile_with_options(&self.options.default_compilation_options, expr, params)
    }

    /// Compile an expression.
    ///
    /// Type-checks against globals and `params`, reporting every type error
    /// as a diagnostic, then optimizes if `options.optimize` is set.
    pub fn compile_with_options(
        &self,
        options: &CompilationOptions,
        expr: Expr,
        params: &TypeEnv,
    ) -> Result<CompiledExpression, Error> {
        let type_env = self
            .global_types
            .extend(params.iter().map(|(name, ty)| (name, *ty)));

        let return_type = analyzer::type_check(&expr, &type_env)?;

        let expr = if options.optimize {
            let (optimized, stats) = self.optimizer.optimise_with_stats(expr);
            debug!(
                iterations = stats.iterations,
                fixed_point = stats.reached_fixed_point,
                "optimized compiled expression"
            );
            optimized
        } else {
            expr
        };

        // Free variables that are not globals must be supplied by the caller.
        let params: Vec<(String, Type)> = variables(&expr)
            .into_iter()
            .filter_map(|name| params.lookup(&name).map(|ty| (name, *ty)))
            .collect();

        Ok(CompiledExpression::new(
            expr,
            return_type,
            params,
            self.globals.clone(),
            self.options.default_execution_options.clone(),
        ))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default(), |_| {})
    }
}
