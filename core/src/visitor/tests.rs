use alloc::collections::{BTreeMap, BTreeSet};

use pretty_assertions::assert_eq;

use super::*;
use crate::ir::{BinaryOp, Expr, Value};
use crate::{String, ToString, Vec, vec};

fn add(l: Expr, r: Expr) -> Expr {
    Expr::binary(l, BinaryOp::Add, r)
}

fn mul(l: Expr, r: Expr) -> Expr {
    Expr::binary(l, BinaryOp::Mul, r)
}

/// `if (x < 10) then (x + 1) else (x + 1) * y`
fn sample() -> Expr {
    Expr::conditional(
        Expr::binary(Expr::var("x"), BinaryOp::Lt, Expr::int(10)),
        add(Expr::var("x"), Expr::int(1)),
        mul(add(Expr::var("x"), Expr::int(1)), Expr::var("y")),
    )
}

#[test]
fn test_children_order() {
    assert!(Expr::int(1).children().is_empty());
    assert!(Expr::var("x").children().is_empty());

    let bin = add(Expr::int(1), Expr::var("x"));
    let kids: Vec<&Expr> = bin.children().into_iter().collect();
    assert_eq!(kids, vec![&Expr::int(1), &Expr::var("x")]);

    let cond = Expr::conditional(Expr::bool(true), Expr::int(1), Expr::int(2));
    let kids: Vec<&Expr> = cond.children().into_iter().collect();
    assert_eq!(kids, vec![&Expr::bool(true), &Expr::int(1), &Expr::int(2)]);
    assert_eq!(cond.arity(), 3);
}

#[test]
fn test_rebuild_keeps_payload() {
    let node = Expr::binary(Expr::int(1), BinaryOp::Sub, Expr::int(2));
    let rebuilt = node.rebuild([Expr::var("a"), Expr::var("b")]);
    assert_eq!(rebuilt, Expr::binary(Expr::var("a"), BinaryOp::Sub, Expr::var("b")));

    let leaf = Expr::str("s");
    assert_eq!(leaf.rebuild([]), leaf);
}

#[test]
fn test_rebuild_with_own_children_is_identity() {
    let tree = sample();
    let same = tree.rebuild(tree.children().into_iter().cloned());
    assert_eq!(same, tree);
}

#[test]
#[should_panic(expected = "Binary node takes 2 children, got 1")]
fn test_rebuild_arity_mismatch_panics() {
    let node = add(Expr::int(1), Expr::int(2));
    let _ = node.rebuild([Expr::int(3)]);
}

#[test]
fn test_map_children_only_touches_immediate_children() {
    let tree = add(add(Expr::int(1), Expr::int(2)), Expr::int(3));
    let mapped = tree.map_children(|child| match child {
        Expr::Literal(Value::Int(n)) => Expr::int(n * 10),
        other => other,
    });
    assert_eq!(mapped, add(add(Expr::int(1), Expr::int(2)), Expr::int(30)));
}

#[test]
fn test_bottom_up_sees_transformed_children() {
    // Folding additions of literals must cascade in a single pass.
    let tree = add(add(Expr::int(1), Expr::int(2)), add(Expr::int(3), Expr::int(4)));
    let folded = tree.transform_bottom_up(|e| match &e {
        Expr::Binary {
            left,
            op: BinaryOp::Add,
            right,
        } => match (left.as_literal(), right.as_literal()) {
            (Some(Value::Int(a)), Some(Value::Int(b))) => Expr::int(a + b),
            _ => e,
        },
        _ => e,
    });
    assert_eq!(folded, Expr::int(10));
}

#[test]
fn test_visit_order() {
    let tree = add(mul(Expr::var("a"), Expr::var("b")), Expr::var("c"));

    let mut bottom_up = Vec::new();
    let _ = tree.clone().transform_bottom_up(|e| {
        bottom_up.push(e.to_string());
        e
    });
    assert_eq!(bottom_up, vec!["a", "b", "(a * b)", "c", "((a * b) + c)"]);

    let mut top_down = Vec::new();
    let _ = tree.transform_top_down(|e| {
        top_down.push(e.to_string());
        e
    });
    assert_eq!(top_down, vec!["((a * b) + c)", "(a * b)", "a", "b", "c"]);
}

#[test]
fn test_top_down_sees_original_shape() {
    // Rewriting `x * 2` to `x + x` at the root; the parent is seen before the
    // child multiplication changes.
    let tree = mul(mul(Expr::var("x"), Expr::int(2)), Expr::int(2));
    let mut seen = Vec::new();
    let rewritten = tree.transform_top_down(|e| {
        seen.push(e.to_string());
        match e {
            Expr::Binary {
                left,
                op: BinaryOp::Mul,
                right,
            } if *right == Expr::int(2) => add((*left).clone(), *left),
            other => other,
        }
    });
    assert_eq!(seen[0], "((x * 2) * 2)");
    assert_eq!(
        rewritten,
        add(add(Expr::var("x"), Expr::var("x")), add(Expr::var("x"), Expr::var("x")))
    );
}

#[test]
fn test_fold_map_is_preorder() {
    let tree = sample();
    let order = fold_map(
        &tree,
        &|e| match e {
            Expr::Literal(v) => vec![v.to_string()],
            Expr::Variable(name) => vec![name.clone()],
            Expr::Binary { op, .. } => vec![op.to_string()],
            Expr::Conditional { .. } => vec![String::from("if")],
        },
        &|mut a, mut b| {
            a.append(&mut b);
            a
        },
    );
    assert_eq!(
        order,
        vec!["if", "<", "x", "10", "+", "x", "1", "*", "+", "x", "1", "y"]
    );
}

#[test]
fn test_variables_and_literals() {
    let tree = sample();
    assert_eq!(
        variables(&tree),
        BTreeSet::from([String::from("x"), String::from("y")])
    );
    assert_eq!(literals(&tree), BTreeSet::from([Value::Int(1), Value::Int(10)]));
    assert!(variables(&Expr::int(1)).is_empty());
}

#[test]
fn test_operators_multiset() {
    let tree = sample();
    assert_eq!(
        operators(&tree),
        BTreeMap::from([(BinaryOp::Add, 2), (BinaryOp::Mul, 1), (BinaryOp::Lt, 1)])
    );
}

#[test]
fn test_count_nodes() {
    let counts = count_nodes(&sample());
    assert_eq!(
        counts,
        NodeCounts {
            literals: 3,
            variables: 4,
            binaries: 4,
            conditionals: 1,
        }
    );
    assert_eq!(counts.total(), 12);
    assert_eq!(count_nodes(&Expr::var("z")), NodeCounts::ONE_VARIABLE);
}

#[test]
fn test_node_counts_monoid() {
    let a = NodeCounts::ONE_LITERAL + NodeCounts::ONE_BINARY;
    assert_eq!(a + NodeCounts::ZERO, a);
    assert_eq!(
        (a + NodeCounts::ONE_VARIABLE) + NodeCounts::ONE_CONDITIONAL,
        a + (NodeCounts::ONE_VARIABLE + NodeCounts::ONE_CONDITIONAL)
    );
    let mut b = NodeCounts::ZERO;
    b += a;
    assert_eq!(b, a);
    assert_eq!(
        a.to_string(),
        "1 literals, 0 variables, 1 binaries, 0 conditionals"
    );
}

#[test]
fn test_depth() {
    assert_eq!(depth(&Expr::int(1)), 1);
    assert_eq!(depth(&Expr::var("x")), 1);
    assert_eq!(depth(&add(Expr::int(1), Expr::int(2))), 2);
    assert_eq!(depth(&sample()), 4);
}

#[test]
fn test_constantness() {
    assert!(is_constant(&add(Expr::int(1), Expr::int(2))));
    assert!(!is_constant(&sample()));
    assert!(has_variables(&Expr::conditional(
        Expr::bool(true),
        Expr::int(1),
        Expr::var("late"),
    )));
}

#[test]
fn test_common_subexpressions_reports_repeats_only() {
    let repeated = add(Expr::var("x"), Expr::int(1));
    let found = common_subexpressions(&sample());

    assert_eq!(found.get(&repeated), Some(&2));
    assert_eq!(found.get(&Expr::var("x")), Some(&3));
    assert_eq!(found.get(&Expr::int(1)), Some(&2));
    assert_eq!(found.get(&Expr::var("y")), None);
    assert_eq!(found.get(&Expr::int(10)), None);
    assert!(found.values().all(|&n| n > 1));
    assert_eq!(found.len(), 3);
}

#[test]
fn test_closure_visitor() {
    let mut kinds = Vec::new();
    ClosureVisitor(|e: &Expr| kinds.push(e.kind_name())).visit_expr(&add(
        Expr::int(1),
        Expr::var("x"),
    ));
    assert_eq!(kinds, vec!["Binary", "Literal", "Variable"]);
}
