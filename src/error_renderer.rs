//! Error rendering using ariadne
//!
//! Expression trees carry no source positions, so compilation diagnostics
//! are drawn against the tree's canonical rendering ([`Expr::format`]).

use crate::{Diagnostic, Error, Expr, Severity};
use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;
use std::ops::Range;

const SOURCE_ID: &str = "<expr>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use arbor::{BinaryOp, Engine, Expr, TypeEnv, render_error};
///
/// let engine = Engine::default();
/// let expr = Expr::binary(Expr::int(1), BinaryOp::Add, Expr::bool(true));
/// if let Err(e) = engine.compile(expr.clone(), &TypeEnv::empty()) {
///     render_error(&e, &expr);
/// }
/// ```
pub fn render_error(error: &Error, expr: &Expr) {
    render_error_to_writer(error, expr, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, expr: &Expr, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, expr, writer, true)
}

/// Render an error to a String (useful for logs, UIs, etc.)
pub fn render_error_to_string(error: &Error, expr: &Expr) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, expr, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error, expr: &Expr) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, expr, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    expr: &Expr,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Compilation { diagnostics } => {
            render_diagnostics(&expr.format(), diagnostics, writer, use_color)
        }
        Error::Runtime(msg) => writeln!(writer, "Runtime error: {}", msg),
        Error::ResourceExceeded(msg) => writeln!(writer, "Resource limit exceeded: {}", msg),
        Error::Api(msg) => writeln!(writer, "API error: {}", msg),
    }
}

fn render_diagnostics(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    // Byte offsets; string literals may hold non-ASCII text.
    let span: Range<usize> = 0..source.len();

    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
            Severity::Info => ReportKind::Advice,
        };

        let mut report = Report::build(kind, (SOURCE_ID, span.clone()))
            .with_message(&diag.message)
            .with_config(
                Config::default()
                    .with_color(use_color)
                    .with_index_type(IndexType::Byte),
            );

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        report = report.with_label(
            Label::new((SOURCE_ID, span.clone()))
                .with_message(&diag.message)
                .with_color(colors.next()),
        );

        if let Some(help) = &diag.help {
            report = report.with_help(help);
        }

        report
            .finish()
            .write((SOURCE_ID, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}
