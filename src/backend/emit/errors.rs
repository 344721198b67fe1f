//! Define error types for implementation-unit emission.
//!
//! Both variants are unit-scoped and unrecoverable: they mean an upstream pass handed the emitter a model that
//! breaks its contract. The driver aborts the affected unit, reports a diagnostic, and moves on.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// Error during unit emission.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum EmitError {
    #[error("malformed model: {type_name}.{member} (line {line}): {reason}")]
    #[diagnostic(
        code(objgen::malformed_model),
        help("the resolver produced a model that violates the emitter's input contract")
    )]
    MalformedModel {
        type_name: String,
        member: String,
        line: u32,
        reason: String,
    },

    #[error("`{type_name}` needs exactly one designated initializer candidate, found {found} (at `{selector}`)")]
    #[diagnostic(
        code(objgen::ambiguous_designated_initializer),
        help("mark exactly one non-delegating constructor as the designated candidate")
    )]
    AmbiguousDesignatedInitializer {
        type_name: String,
        selector: String,
        line: u32,
        found: usize,
    },
}

impl EmitError {
    pub fn malformed(type_name: &str, member: &str, line: u32, reason: impl Into<String>) -> Self {
        EmitError::MalformedModel {
            type_name: type_name.to_string(),
            member: member.to_string(),
            line,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        match self {
            EmitError::MalformedModel { .. } => DiagnosticKind::MalformedModel,
            EmitError::AmbiguousDesignatedInitializer { .. } => DiagnosticKind::AmbiguousDesignatedInitializer,
        }
    }

    /// Flatten into the `(kind, type, member, line)` tuple reported to the diagnostic sink.
    pub fn diagnostic(&self) -> Diagnostic {
        let (type_name, member, line) = match self {
            EmitError::MalformedModel {
                type_name, member, line, ..
            } => (type_name.clone(), member.clone(), *line),
            EmitError::AmbiguousDesignatedInitializer {
                type_name, selector, line, ..
            } => (type_name.clone(), selector.clone(), *line),
        };
        Diagnostic {
            kind: self.kind(),
            type_name,
            member,
            line,
            message: self.to_string(),
        }
    }
}
