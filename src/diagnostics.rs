//! Diagnostics surfaced by unit emission.
//!
//! The emitter reports `(kind, type, member, line)` tuples; where they go (stderr, an IDE, a build log) is decided
//! by whoever implements [`DiagnosticSink`].

use std::fmt;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    MalformedModel,
    AmbiguousDesignatedInitializer,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MalformedModel => write!(f, "malformed model"),
            DiagnosticKind::AmbiguousDesignatedInitializer => write!(f, "ambiguous designated initializer"),
        }
    }
}

/// A unit-scoped emission failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub type_name: String,
    /// Field name, or the selector of the offending constructor or method.
    pub member: String,
    pub line: u32,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.type_name, self.line, self.message)
    }
}

/// Receiver of emission diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
