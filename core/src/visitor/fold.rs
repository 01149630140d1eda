//! Whole-tree folds.
//!
//! [`fold_map`] is the single recursion; every collector below is an
//! `extract` plus an associative `combine`.

use alloc::collections::{BTreeMap, BTreeSet};

use hashbrown::HashMap;

use super::{DepthCalculator, ExprVisitor, NodeCounts};
use crate::ir::{BinaryOp, Expr, Value};
use crate::String;

/// Fold a tree into a single value.
///
/// `extract` runs on every node. Results are combined in pre-order: the node
/// itself, then each child's fold from left to right. `combine` must be
/// associative.
pub fn fold_map<R>(
    expr: &Expr,
    extract: &impl Fn(&Expr) -> R,
    combine: &impl Fn(R, R) -> R,
) -> R {
    let mut acc = extract(expr);
    for child in expr.children() {
        acc = combine(acc, fold_map(child, extract, combine));
    }
    acc
}

fn union<T: Ord>(mut a: BTreeSet<T>, mut b: BTreeSet<T>) -> BTreeSet<T> {
    a.append(&mut b);
    a
}

/// Names of every variable referenced in the tree.
pub fn variables(expr: &Expr) -> BTreeSet<String> {
    fold_map(
        expr,
        &|e| match e {
            Expr::Variable(name) => BTreeSet::from([name.clone()]),
            Expr::Literal(_) | Expr::Binary { .. } | Expr::Conditional { .. } => BTreeSet::new(),
        },
        &union,
    )
}

/// Distinct literal values in the tree.
pub fn literals(expr: &Expr) -> BTreeSet<Value> {
    fold_map(
        expr,
        &|e| match e {
            Expr::Literal(value) => BTreeSet::from([value.clone()]),
            Expr::Variable(_) | Expr::Binary { .. } | Expr::Conditional { .. } => BTreeSet::new(),
        },
        &union,
    )
}

/// Multiset of operators used, as operator -> occurrences.
pub fn operators(expr: &Expr) -> BTreeMap<BinaryOp, usize> {
    fold_map(
        expr,
        &|e| match e {
            Expr::Binary { op, .. } => BTreeMap::from([(*op, 1)]),
            Expr::Literal(_) | Expr::Variable(_) | Expr::Conditional { .. } => BTreeMap::new(),
        },
        &|mut a, b| {
            for (op, n) in b {
                *a.entry(op).or_insert(0) += n;
            }
            a
        },
    )
}

pub fn count_nodes(expr: &Expr) -> NodeCounts {
    fold_map(expr, &NodeCounts::of, &|a, b| a + b)
}

/// Leaf depth is 1; an inner node is one more than its deepest child.
pub fn depth(expr: &Expr) -> usize {
    let mut calc = DepthCalculator::new();
    calc.visit_expr(expr);
    calc.max_depth
}

pub fn has_variables(expr: &Expr) -> bool {
    fold_map(
        expr,
        &|e| match e {
            Expr::Variable(_) => true,
            Expr::Literal(_) | Expr::Binary { .. } | Expr::Conditional { .. } => false,
        },
        &|a, b| a || b,
    )
}

/// True when the tree references no variables.
pub fn is_constant(expr: &Expr) -> bool {
    !has_variables(expr)
}

/// Subtrees that occur more than once, by structural equality, with their
/// occurrence counts. Leaves are included.
pub fn common_subexpressions(expr: &Expr) -> HashMap<Expr, usize> {
    let mut counts = HashMap::new();
    count_subtrees(expr, &mut counts);

    counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(node, n)| (node.clone(), n))
        .collect()
}

// Counts by reference so each subtree is cloned at most once.
fn count_subtrees<'a>(expr: &'a Expr, counts: &mut HashMap<&'a Expr, usize>) {
    *counts.entry(expr).or_insert(0) += 1;
    for child in expr.children() {
        count_subtrees(child, counts);
    }
}
