//! Fixed-point tree optimizer.
//!
//! One round rewrites the tree bottom-up, running the enabled [`Rule`]s in
//! order at every node (fold, then simplify, then eliminate). Rounds repeat
//! until a round returns a tree structurally equal to its input, or until
//! [`OptimizerOptions::max_iterations`] rounds have run.
//!
//! ```
//! use arbor_core::ir::{BinaryOp, Expr};
//! use arbor_core::optimizer::optimise;
//!
//! let expr = Expr::binary(
//!     Expr::binary(Expr::int(1), BinaryOp::Add, Expr::int(2)),
//!     BinaryOp::Mul,
//!     Expr::int(3),
//! );
//! assert_eq!(optimise(expr), Expr::int(9));
//! ```

pub mod rules;


pub use rules::{Rule, eliminate_dead_branches, fold_constants, simplify_identities};

use tracing::debug;

use crate::{Vec, ir::Expr};

/// Configuration for [`Optimizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerOptions {
    /// Upper bound on rounds. Any finite tree settles well before the
    /// default of 100.
    pub max_iterations: usize,

    /// Rules run at each node, in this order.
    ///
    /// Default: all of [`Rule::ALL`].
    pub rules: Vec<Rule>,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            rules: Rule::ALL.to_vec(),
        }
    }
}

/// How an optimization run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeStats {
    /// Rounds run, including the final round that changed nothing.
    pub iterations: usize,
    /// False only when the iteration cap stopped the run.
    pub reached_fixed_point: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    options: OptimizerOptions,
}

impl Optimizer {
    pub fn new(options: OptimizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OptimizerOptions {
        &self.options
    }

    /// One bottom-up round of the configured rules.
    pub fn run_pass(&self, expr: Expr) -> Expr {
        expr.transform_bottom_up(|node| {
            self.options
                .rules
                .iter()
                .fold(node, |node, rule| rule.apply(node))
        })
    }

    pub fn optimise(&self, expr: Expr) -> Expr {
        self.optimise_with_stats(expr).0
    }

    pub fn optimise_with_stats(&self, expr: Expr) -> (Expr, OptimizeStats) {
        let mut current = expr;
        for iteration in 1..=self.options.max_iterations {
            let next = self.run_pass(current.clone());
            if next == current {
                debug!(iterations = iteration, "optimizer reached fixed point");
                return (
                    next,
                    OptimizeStats {
                        iterations: iteration,
                        reached_fixed_point: true,
                    },
                );
            }
            debug!(iteration, "optimizer round changed the tree");
            current = next;
        }

        debug!(
            max_iterations = self.options.max_iterations,
            "optimizer stopped at iteration cap"
        );
        (
            current,
            OptimizeStats {
                iterations: self.options.max_iterations,
                reached_fixed_point: false,
            },
        )
    }
}

/// Optimise with the default rules and iteration cap.
pub fn optimise(expr: Expr) -> Expr {
    Optimizer::default().optimise(expr)
}

/// Like [`optimise`], also reporting how many rounds it took.
pub fn optimise_with_stats(expr: Expr) -> (Expr, OptimizeStats) {
    Optimizer::default().optimise_with_stats(expr)
}

/// A single round of all three rules, without iterating.
pub fn run_all_passes(expr: Expr) -> Expr {
    Optimizer::default().run_pass(expr)
}
