use core::fmt;
use core::ops::{Add, AddAssign};

use crate::ir::Expr;

/// Per-variant node counts. Forms a monoid under `+` with [`NodeCounts::ZERO`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NodeCounts {
    pub literals: usize,
    pub variables: usize,
    pub binaries: usize,
    pub conditionals: usize,
}

impl NodeCounts {
    pub const ZERO: NodeCounts = NodeCounts {
        literals: 0,
        variables: 0,
        binaries: 0,
        conditionals: 0,
    };

    pub const ONE_LITERAL: NodeCounts = NodeCounts {
        literals: 1,
        ..Self::ZERO
    };

    pub const ONE_VARIABLE: NodeCounts = NodeCounts {
        variables: 1,
        ..Self::ZERO
    };

    pub const ONE_BINARY: NodeCounts = NodeCounts {
        binaries: 1,
        ..Self::ZERO
    };

    pub const ONE_CONDITIONAL: NodeCounts = NodeCounts {
        conditionals: 1,
        ..Self::ZERO
    };

    /// Counts for a single node, ignoring its children.
    pub fn of(expr: &Expr) -> NodeCounts {
        match expr {
            Expr::Literal(_) => Self::ONE_LITERAL,
            Expr::Variable(_) => Self::ONE_VARIABLE,
            Expr::Binary { .. } => Self::ONE_BINARY,
            Expr::Conditional { .. } => Self::ONE_CONDITIONAL,
        }
    }

    pub fn total(&self) -> usize {
        self.literals + self.variables + self.binaries + self.conditionals
    }
}

impl Add for NodeCounts {
    type Output = NodeCounts;

    fn add(self, rhs: NodeCounts) -> NodeCounts {
        NodeCounts {
            literals: self.literals + rhs.literals,
            variables: self.variables + rhs.variables,
            binaries: self.binaries + rhs.binaries,
            conditionals: self.conditionals + rhs.conditionals,
        }
    }
}

impl AddAssign for NodeCounts {
    fn add_assign(&mut self, rhs: NodeCounts) {
        *self = *self + rhs;
    }
}

impl fmt::Display for NodeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} literals, {} variables, {} binaries, {} conditionals",
            self.literals, self.variables, self.binaries, self.conditionals
        )
    }
}
