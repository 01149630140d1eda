//! Deterministic textual rendering of expression trees.
//!
//! The rendering is fully parenthesized so it can be re-parsed without any
//! precedence rules:
//!
//! | Node | Rendering |
//! |---|---|
//! | `Literal(1)` | `1` |
//! | `Literal("a")` | `"a"` |
//! | `Variable(x)` | `x` |
//! | `Binary(l, +, r)` | `(l + r)` |
//! | `Conditional(c, t, e)` | `(if c then t else e)` |

use core::fmt;

use super::Expr;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::Variable(name) => f.write_str(name),
            Expr::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
            Expr::Conditional {
                cond,
                then_branch,
                else_branch,
            } => write!(f, "(if {cond} then {then_branch} else {else_branch})"),
        }
    }
}

/// Escape a string for use inside a double-quoted literal.
pub fn escape_str(s: &str) -> EscapeStr<'_> {
    EscapeStr(s)
}

pub struct EscapeStr<'a>(&'a str);

impl fmt::Display for EscapeStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c.is_control() => write!(f, "\\u{{{:x}}}", c as u32)?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
