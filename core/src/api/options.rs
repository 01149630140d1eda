//! Configuration options for the arbor engine.

pub use crate::optimizer::OptimizerOptions;

/// Configuration options for compilation.
///
/// # Example
///
/// ```
/// use arbor_core::api::CompilationOptions;
///
/// let options = CompilationOptions { optimize: false };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationOptions {
    /// Run the optimizer on the tree after it type-checks.
    ///
    /// Default: true
    pub optimize: bool,
}

impl Default for CompilationOptions {
    fn default() -> Self {
        Self { optimize: true }
    }
}

/// Configuration options for expression execution.
///
/// These options control resource limits during evaluation.
///
/// # Example
///
/// ```
/// use arbor_core::api::ExecutionOptions;
///
/// let options = ExecutionOptions { max_depth: 500 };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 10_000
    pub max_depth: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            max_depth: crate::evaluator::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration options for the arbor engine.
///
/// These options set the defaults for compilation and execution,
/// which can be overridden on a per-call basis.
///
/// # Example
///
/// ```
/// use arbor_core::api::{CompilationOptions, EngineOptions, ExecutionOptions};
///
/// let options = EngineOptions {
///     default_compilation_options: CompilationOptions::default(),
///     default_execution_options: ExecutionOptions { max_depth: 500 },
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Default options for compilation.
    ///
    /// These can be overridden when calling `Engine::compile_with_options()`.
    pub default_compilation_options: CompilationOptions,

    /// Default options for execution.
    ///
    /// These can be overridden when calling `CompiledExpression::run_with_options()`.
    pub default_execution_options: ExecutionOptions,

    /// Rules and iteration cap used when compilation optimizes.
    pub optimizer: OptimizerOptions,
}
