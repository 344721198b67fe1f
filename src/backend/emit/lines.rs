//! Interleave `#line` markers that map emitted code back to object-language source lines.
//!
//! Markers are written before every top-level declaration and before each body statement whose line differs from
//! the last marker written for that declaration. Synthetic statements carry no line and never get a marker. When
//! disabled the mapper writes nothing, so output is otherwise byte-identical.

use crate::backend::writer::UnitWriter;

use super::{Decl, Stmt};

/// Tracks the last marker written within the current declaration.
#[derive(Debug, Clone, Copy)]
pub struct LineMapper {
    enabled: bool,
    last: Option<u32>,
}

impl LineMapper {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, last: None }
    }

    /// Mark the start of a top-level declaration. Always writes a marker when enabled and seeds the body.
    pub fn declaration(&mut self, w: &mut UnitWriter, line: u32) {
        if !self.enabled {
            return;
        }
        w.directive(&format!("#line {line}"));
        self.last = Some(line);
    }

    /// Mark a body statement if its line moved.
    pub fn statement(&mut self, w: &mut UnitWriter, stmt: &Stmt) {
        if !self.enabled {
            return;
        }
        if let Some(line) = stmt.line {
            if self.last != Some(line) {
                w.directive(&format!("#line {line}"));
                self.last = Some(line);
            }
        }
    }

    /// Write one declaration with its markers.
    pub fn write_decl(&mut self, w: &mut UnitWriter, decl: &Decl) {
        self.declaration(w, decl.line);
        for head in &decl.head {
            w.line(head);
        }
        w.indent();
        for stmt in &decl.body {
            self.statement(w, stmt);
            if stmt.text.is_empty() {
                w.blank_line();
            } else {
                w.line(&stmt.text);
            }
        }
        w.dedent();
        for tail in &decl.tail {
            w.line(tail);
        }
    }
}
