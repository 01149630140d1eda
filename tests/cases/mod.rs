#![allow(dead_code)]

use arbor::{BinaryOp, Environment, Expr, Type, TypeEnv, Value};
use once_cell::sync::Lazy;

pub fn int(n: i64) -> Expr {
    Expr::int(n)
}

pub fn boolean(b: bool) -> Expr {
    Expr::bool(b)
}

pub fn string(s: &str) -> Expr {
    Expr::str(s)
}

pub fn var(name: &str) -> Expr {
    Expr::var(name)
}

pub fn bin(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    Expr::binary(left, op, right)
}

pub fn cond(c: Expr, t: Expr, e: Expr) -> Expr {
    Expr::conditional(c, t, e)
}

/// Runtime bindings shared by the case files.
pub static BINDINGS: Lazy<Vec<(&'static str, Value)>> = Lazy::new(|| {
    vec![
        ("x", Value::Int(3)),
        ("y", Value::Int(-2)),
        ("zero", Value::Int(0)),
        ("flag", Value::Bool(true)),
        ("name", Value::from("arbor")),
    ]
});

pub fn env() -> Environment {
    BINDINGS
        .iter()
        .map(|(name, value)| (*name, value.clone()))
        .collect()
}

pub fn type_env() -> TypeEnv {
    BINDINGS
        .iter()
        .map(|(name, value)| (*name, value.ty()))
        .collect()
}

/// A tree exercised through the whole pipeline.
pub struct TestCase {
    pub name: &'static str,
    pub expr: Expr,
    pub optimized: &'static str,
    pub ty: Type,
    pub value: Value,
}

pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    use BinaryOp::*;

    vec![
        TestCase {
            name: "constant_arithmetic",
            expr: bin(bin(int(1), Add, int(2)), Mul, int(3)),
            optimized: "9",
            ty: Type::Int,
            value: Value::Int(9),
        },
        TestCase {
            name: "guarded_identity",
            expr: cond(
                bin(boolean(true), And, bin(int(1), Lt, int(2))),
                bin(bin(var("x"), Add, int(0)), Mul, int(1)),
                var("y"),
            ),
            optimized: "x",
            ty: Type::Int,
            value: Value::Int(3),
        },
        TestCase {
            name: "runtime_comparison",
            expr: cond(bin(var("x"), Gt, var("y")), var("x"), var("y")),
            optimized: "(if (x > y) then x else y)",
            ty: Type::Int,
            value: Value::Int(3),
        },
        TestCase {
            name: "absorbing_zero",
            expr: bin(int(0), Mul, bin(var("x"), Sub, var("y"))),
            optimized: "0",
            ty: Type::Int,
            value: Value::Int(0),
        },
        TestCase {
            name: "string_equality",
            expr: bin(var("name"), Eq, string("arbor")),
            optimized: "(name == \"arbor\")",
            ty: Type::Bool,
            value: Value::Bool(true),
        },
        TestCase {
            name: "logical_identities",
            expr: bin(bin(var("flag"), Or, boolean(false)), And, boolean(true)),
            optimized: "flag",
            ty: Type::Bool,
            value: Value::Bool(true),
        },
    ]
});

/// Declares a test over one tree, checking only the fields given.
///
/// Every field after `expr` is optional:
/// - `formatted`: canonical rendering of the input tree
/// - `optimized`: canonical rendering after `optimise`
/// - `ty`: the type assigned by the checker under [`type_env`]
/// - `errors`: every type error message, in order
/// - `value`: the result of evaluating under [`env`], before and after optimizing
/// - `runtime_error`: the evaluation error message under [`env`]
#[allow(unused_macros)]
macro_rules! test_case {
    (
        name: $name:ident,
        expr: $expr:expr,
        $( formatted: $formatted:expr, )?
        $( optimized: $optimized:expr, )?
        $( ty: $ty:expr, )?
        $( errors: [$($error:expr),* $(,)?], )?
        $( value: $value:expr, )?
        $( runtime_error: $runtime:expr, )?
    ) => {
        #[test]
        fn $name() {
            #[allow(unused_imports)]
            use arbor::BinaryOp::*;
            #[allow(unused_imports)]
            use crate::cases::*;

            let expr: arbor::Expr = $expr;

            $(
                pretty_assertions::assert_eq!(expr.format(), $formatted);
            )?

            $(
                pretty_assertions::assert_eq!(arbor::optimise(expr.clone()).format(), $optimized);
            )?

            $(
                pretty_assertions::assert_eq!(arbor::type_check(&expr, &type_env()), Ok($ty));
            )?

            $(
                let errors = arbor::type_check(&expr, &type_env())
                    .expect_err("expected type errors");
                let messages: Vec<String> = errors.iter().map(|e| e.message()).collect();
                let expected: Vec<&str> = vec![$($error),*];
                pretty_assertions::assert_eq!(messages, expected);
            )?

            $(
                let expected = arbor::Value::from($value);
                pretty_assertions::assert_eq!(arbor::evaluate(&expr, &env()), Ok(expected.clone()));
                pretty_assertions::assert_eq!(
                    arbor::evaluate(&arbor::optimise(expr.clone()), &env()),
                    Ok(expected)
                );
            )?

            $(
                pretty_assertions::assert_eq!(
                    arbor::evaluate(&expr, &env()).map_err(|e| e.to_string()),
                    Err(String::from($runtime))
                );
            )?
        }
    };
}
