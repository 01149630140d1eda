use core::fmt;

use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::ir::{BinaryOp, OpClass, Type};
use crate::{String, ToString, Vec};

/// A single violated typing constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeError {
    pub kind: TypeErrorKind,
}

/// Specific kinds of type errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeErrorKind {
    /// Variable missing from the typing context
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },

    /// Operand types not admitted by the operator
    #[error(
        "{} operator '{op}' requires {}, got {left} and {right}",
        .op.class(),
        operand_requirement(.op)
    )]
    InvalidOperands {
        op: BinaryOp,
        left: Type,
        right: Type,
    },

    /// Conditional guard is not Bool
    #[error("Conditional requires Bool condition, got {found}")]
    ConditionNotBool { found: Type },

    /// Conditional branches disagree
    #[error("Conditional branches must have same type, got {then_ty} and {else_ty}")]
    BranchMismatch { then_ty: Type, else_ty: Type },
}

fn operand_requirement(op: &BinaryOp) -> &'static str {
    match op.class() {
        OpClass::Arithmetic | OpClass::Ordering => "Int operands",
        OpClass::Logical => "Bool operands",
        OpClass::Equality => "matching types",
    }
}

impl TypeError {
    pub fn new(kind: TypeErrorKind) -> Self {
        Self { kind }
    }

    pub fn undefined_variable(name: impl Into<String>) -> Self {
        Self::new(TypeErrorKind::UndefinedVariable { name: name.into() })
    }

    pub fn invalid_operands(op: BinaryOp, left: Type, right: Type) -> Self {
        Self::new(TypeErrorKind::InvalidOperands { op, left, right })
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Stable code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self.kind {
            TypeErrorKind::InvalidOperands { .. } => "E001",
            TypeErrorKind::UndefinedVariable { .. } => "E002",
            TypeErrorKind::ConditionNotBool { .. } => "E003",
            TypeErrorKind::BranchMismatch { .. } => "E004",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match &self.kind {
            TypeErrorKind::UndefinedVariable { .. } => {
                Some("Declare the variable's type in the typing context")
            }
            TypeErrorKind::InvalidOperands { op, .. } => Some(match op.class() {
                OpClass::Arithmetic => "Arithmetic is only defined on Int",
                OpClass::Ordering => "Only Int values can be ordered",
                OpClass::Logical => "Combine Bool values only",
                OpClass::Equality => "Both sides of an equality must have the same type",
            }),
            TypeErrorKind::ConditionNotBool { .. } => {
                Some("Use a comparison to turn the condition into a Bool")
            }
            TypeErrorKind::BranchMismatch { .. } => None,
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: self.message(),
            help: self.help().map(String::from),
            code: Some(self.code().to_string()),
        }
    }
}

impl From<TypeErrorKind> for TypeError {
    fn from(kind: TypeErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind, self.code())?;

        if let Some(help) = self.help() {
            write!(f, "\nhelp: {help}")?;
        }

        Ok(())
    }
}

impl core::error::Error for TypeError {}

/// Render a batch of errors one per line, in order.
pub fn format_errors(errors: &[TypeError]) -> String {
    errors
        .iter()
        .map(|e| e.kind.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
