//! Environment builder for registering global values.

use crate::analyzer::TypeEnv;
use crate::evaluator::Environment;
use crate::ir::Value;
use crate::{String, Vec};

/// Builder for constructing the global environment.
///
/// Globals are constants visible to every expression compiled with the
/// engine. Their types come from their values.
///
/// # Example
///
/// ```
/// use arbor_core::api::{Engine, EngineOptions};
/// use arbor_core::ir::Value;
///
/// let engine = Engine::new(EngineOptions::default(), |env| {
///     env.register("limit", Value::Int(10));
/// });
/// assert!(engine.globals().contains("limit"));
/// ```
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    entries: Vec<(String, Value)>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a global constant. A later registration of the same name
    /// replaces the earlier one.
    pub fn register(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.entries.push((name.into(), value));
        self
    }

    pub(crate) fn build(self) -> Environment {
        self.entries.into_iter().collect()
    }
}

/// Typing context matching an environment.
pub(crate) fn types_of(env: &Environment) -> TypeEnv {
    env.iter().map(|(name, value)| (name, value.ty())).collect()
}
