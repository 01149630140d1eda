use pretty_assertions::assert_eq;

use super::*;
use crate::analyzer::TypeEnv;
use crate::evaluator::Environment;
use crate::ir::{BinaryOp, Expr, Type, Value};
use crate::test_utils::init_test_logging;
use crate::{String, Vec};

fn bin(l: Expr, op: BinaryOp, r: Expr) -> Expr {
    Expr::binary(l, op, r)
}

/// `if (true && (1 < 2)) then ((x + 0) * 1) else y`
fn guarded() -> Expr {
    Expr::conditional(
        bin(
            Expr::bool(true),
            BinaryOp::And,
            bin(Expr::int(1), BinaryOp::Lt, Expr::int(2)),
        ),
        bin(
            bin(Expr::var("x"), BinaryOp::Add, Expr::int(0)),
            BinaryOp::Mul,
            Expr::int(1),
        ),
        Expr::var("y"),
    )
}

fn int_params(names: &[&str]) -> TypeEnv {
    names.iter().map(|name| (*name, Type::Int)).collect()
}

#[test]
fn test_compile_optimizes_and_narrows_params() {
    init_test_logging();
    let engine = Engine::default();
    let compiled = engine.compile(guarded(), &int_params(&["x", "y"])).unwrap();

    assert_eq!(compiled.expr(), &Expr::var("x"));
    assert_eq!(compiled.return_type(), Type::Int);
    assert_eq!(compiled.params(), &[(String::from("x"), Type::Int)]);

    // `y` was optimized away, so it need not be supplied.
    let args = Environment::empty().bind("x", Value::Int(5));
    assert_eq!(compiled.run(&args), Ok(Value::Int(5)));
}

#[test]
fn test_compile_without_optimizing() {
    let engine = Engine::default();
    let compiled = engine
        .compile_with_options(
            &CompilationOptions { optimize: false },
            guarded(),
            &int_params(&["x", "y"]),
        )
        .unwrap();

    assert_eq!(compiled.expr(), &guarded());
    let names: Vec<&str> = compiled.params().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["x", "y"]);
}

#[test]
fn test_compile_reports_every_type_error() {
    let engine = Engine::default();
    let expr = bin(
        bin(Expr::int(1), BinaryOp::Add, Expr::bool(true)),
        BinaryOp::Mul,
        bin(Expr::bool(false), BinaryOp::And, Expr::int(42)),
    );

    let Err(Error::Compilation { diagnostics }) = engine.compile(expr, &TypeEnv::empty()) else {
        panic!("expected compilation error");
    };
    let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Arithmetic operator '+' requires Int operands, got Int and Bool",
            "Logical operator '&&' requires Bool operands, got Bool and Int",
        ]
    );
    assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));
}

#[test]
fn test_run_validates_arguments() {
    let engine = Engine::default();
    let expr = bin(Expr::var("n"), BinaryOp::Gt, Expr::int(0));
    let compiled = engine.compile(expr, &int_params(&["n"])).unwrap();

    assert_eq!(
        compiled.run(&Environment::empty()),
        Err(Error::Api("Missing argument for parameter 'n'".into()))
    );
    assert_eq!(
        compiled.run(&Environment::empty().bind("n", Value::Bool(true))),
        Err(Error::Api(
            "Type mismatch for parameter 'n': expected Int, got Bool".into()
        ))
    );
    assert_eq!(
        compiled.run(&Environment::empty().bind("n", Value::Int(3))),
        Ok(Value::Bool(true))
    );
}

#[test]
fn test_globals() {
    let engine = Engine::new(EngineOptions::default(), |env| {
        env.register("greeting", Value::from("hello"))
            .register("answer", Value::Int(42));
    });

    let expr = bin(Expr::var("answer"), BinaryOp::Eq, Expr::var("guess"));
    let compiled = engine.compile(expr, &int_params(&["guess"])).unwrap();
    assert_eq!(compiled.params().len(), 1);
    assert_eq!(
        compiled.run(&Environment::empty().bind("guess", Value::Int(42))),
        Ok(Value::Bool(true))
    );

    // A parameter shadows a global of the same name.
    let shadow = TypeEnv::empty().bind("answer", Type::Bool);
    let compiled = engine.compile(Expr::var("answer"), &shadow).unwrap();
    assert_eq!(compiled.return_type(), Type::Bool);
}

#[test]
fn test_runtime_errors_are_mapped() {
    let engine = Engine::default();
    let expr = bin(Expr::var("a"), BinaryOp::Div, Expr::var("b"));
    let compiled = engine.compile(expr, &int_params(&["a", "b"])).unwrap();
    let args = Environment::empty()
        .bind("a", Value::Int(1))
        .bind("b", Value::Int(0));

    assert_eq!(
        compiled.run(&args),
        Err(Error::Runtime("Division by zero".into()))
    );
}

#[test]
fn test_execution_limits() {
    let mut expr = Expr::var("x");
    for _ in 0..10 {
        expr = bin(expr, BinaryOp::Add, Expr::var("x"));
    }

    let engine = Engine::new(
        EngineOptions {
            default_execution_options: ExecutionOptions { max_depth: 5 },
            ..Default::default()
        },
        |_| {},
    );
    let compiled = engine.compile(expr, &int_params(&["x"])).unwrap();
    let args = Environment::empty().bind("x", Value::Int(1));

    assert!(matches!(
        compiled.run(&args),
        Err(Error::ResourceExceeded(_))
    ));
    assert_eq!(
        compiled.run_with_options(&ExecutionOptions::default(), &args),
        Ok(Value::Int(11))
    );
}

#[test]
fn test_default_limits_run_deep_chains() {
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(|| {
            let mut expr = Expr::var("x");
            for _ in 0..1500 {
                expr = bin(expr, BinaryOp::Add, Expr::int(1));
            }

            let engine = Engine::default();
            let compiled = engine.compile(expr, &int_params(&["x"])).unwrap();
            compiled.run(&Environment::empty().bind("x", Value::Int(0)))
        })
        .unwrap();

    assert_eq!(handle.join().unwrap(), Ok(Value::Int(1500)));
}

#[test]
fn test_params_layer_over_globals_in_one_frame() {
    let engine = Engine::new(EngineOptions::default(), |env| {
        env.register("a", Value::Int(1)).register("b", Value::Int(2));
    });
    let params = int_params(&["b", "c", "d"]);
    let expr = bin(
        bin(Expr::var("a"), BinaryOp::Add, Expr::var("b")),
        BinaryOp::Add,
        bin(Expr::var("c"), BinaryOp::Add, Expr::var("d")),
    );
    let compiled = engine.compile(expr, &params).unwrap();

    let args = Environment::empty()
        .bind("b", Value::Int(10))
        .bind("c", Value::Int(100))
        .bind("d", Value::Int(1000));
    assert_eq!(compiled.run(&args), Ok(Value::Int(1111)));
    assert_eq!(engine.globals().frames(), 1);
}
