//! Generic traversal engine for expression trees.
//!
//! Every tree algorithm in this crate is built from one primitive pair:
//!
//! - [`Expr::children`]: the ordered immediate children of a node
//! - [`Expr::rebuild`] / [`Expr::map_children`]: the same node with its
//!   children replaced, payload (operator) untouched
//!
//! On top of those sit the whole-tree rewrite drivers
//! ([`Expr::transform_bottom_up`], [`Expr::transform_top_down`]), the
//! [`ExprVisitor`] trait for read-only walks, and the fold utilities in
//! [`fold`]. Rewrite passes never re-derive the recursion themselves.
//!
//! Child order is fixed: `[left, right]` for Binary and
//! `[cond, then, else]` for Conditional.

pub mod counts;
pub mod fold;
pub mod visit;

pub use counts::NodeCounts;
pub use fold::{
    common_subexpressions, count_nodes, depth, fold_map, has_variables, is_constant, literals,
    operators, variables,
};
pub use visit::{ClosureVisitor, DepthCalculator, ExprVisitor};

use crate::ir::Expr;
use crate::Box;
use smallvec::{SmallVec, smallvec};

/// Immediate children of a node. Three is the widest variant.
pub type Children<'a> = SmallVec<[&'a Expr; 3]>;

impl Expr {
    /// Ordered immediate children: 0 for leaves, 2 for Binary, 3 for Conditional.
    pub fn children(&self) -> Children<'_> {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => SmallVec::new(),
            Expr::Binary { left, right, .. } => smallvec![&**left, &**right],
            Expr::Conditional {
                cond,
                then_branch,
                else_branch,
            } => smallvec![&**cond, &**then_branch, &**else_branch],
        }
    }

    /// Number of immediate children.
    pub fn arity(&self) -> usize {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => 0,
            Expr::Binary { .. } => 2,
            Expr::Conditional { .. } => 3,
        }
    }

    /// Rebuild this node with `new_children` in place of its children.
    ///
    /// The variant and the non-child payload are kept. `new_children` must
    /// be in the order [`Expr::children`] produces.
    ///
    /// # Panics
    ///
    /// Panics if the number of children differs from [`Expr::arity`].
    pub fn rebuild(&self, new_children: impl IntoIterator<Item = Expr>) -> Expr {
        let new_children: SmallVec<[Expr; 3]> = new_children.into_iter().collect();
        assert_eq!(
            new_children.len(),
            self.arity(),
            "rebuild: {} node takes {} children, got {}",
            self.kind_name(),
            self.arity(),
            new_children.len()
        );

        let mut it = new_children.into_iter();
        match self {
            Expr::Literal(_) | Expr::Variable(_) => self.clone(),
            Expr::Binary { op, .. } => match (it.next(), it.next()) {
                (Some(left), Some(right)) => Expr::binary(left, *op, right),
                _ => unreachable!("arity checked above"),
            },
            Expr::Conditional { .. } => match (it.next(), it.next(), it.next()) {
                (Some(cond), Some(then_branch), Some(else_branch)) => {
                    Expr::conditional(cond, then_branch, else_branch)
                }
                _ => unreachable!("arity checked above"),
            },
        }
    }

    /// Apply `f` to every immediate child, in child order, and rebuild.
    ///
    /// This is the by-value form of `rebuild(children().map(f))`; leaves are
    /// returned as-is.
    pub fn map_children(self, mut f: impl FnMut(Expr) -> Expr) -> Expr {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => self,
            Expr::Binary { left, op, right } => {
                let left = f(*left);
                let right = f(*right);
                Expr::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                }
            }
            Expr::Conditional {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond = f(*cond);
                let then_branch = f(*then_branch);
                let else_branch = f(*else_branch);
                Expr::Conditional {
                    cond: Box::new(cond),
                    then_branch: Box::new(then_branch),
                    else_branch: Box::new(else_branch),
                }
            }
        }
    }

    /// Rewrite the whole tree from the leaves up.
    ///
    /// Children are transformed first, the node is rebuilt from them, and
    /// then `f` runs on the rebuilt node. `f` therefore always sees fully
    /// transformed descendants.
    pub fn transform_bottom_up(self, mut f: impl FnMut(Expr) -> Expr) -> Expr {
        bottom_up(self, &mut f)
    }

    /// Rewrite the whole tree from the root down.
    ///
    /// `f` runs on the node first, then the traversal continues into the
    /// children of whatever `f` returned. `f` therefore sees each node
    /// before any of its descendants have been rewritten.
    pub fn transform_top_down(self, mut f: impl FnMut(Expr) -> Expr) -> Expr {
        top_down(self, &mut f)
    }
}

fn bottom_up<F: FnMut(Expr) -> Expr>(expr: Expr, f: &mut F) -> Expr {
    let rebuilt = expr.map_children(|child| bottom_up(child, &mut *f));
    f(rebuilt)
}

fn top_down<F: FnMut(Expr) -> Expr>(expr: Expr, f: &mut F) -> Expr {
    let rewritten = f(expr);
    rewritten.map_children(|child| top_down(child, &mut *f))
}

#[cfg(test)]
mod tests;
