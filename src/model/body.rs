//! Pre-translated method and constructor bodies.
//!
//! Expression translation happens upstream. A statement arrives as native text with typed holes where a field is
//! referenced, so the emitter can decide between a live load and a materialized constant.

use serde::{Deserialize, Serialize};

/// Where a field reference appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefContext {
    /// Ordinary value position; rendered as a live field load.
    Value,
    /// Position that requires a compile-time constant (e.g. a `case` label).
    ConstantRequired,
}

/// One piece of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Text(String),
    FieldRef { field: String, context: RefContext },
}

/// A single statement with its originating source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementModel {
    pub line: u32,
    pub segments: Vec<Segment>,
}

impl StatementModel {
    pub fn new(line: u32, segments: Vec<Segment>) -> Self {
        Self { line, segments }
    }

    /// Field references made from constant-required positions.
    pub fn constant_refs(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::FieldRef {
                field,
                context: RefContext::ConstantRequired,
            } => Some(field.as_str()),
            Segment::FieldRef {
                context: RefContext::Value, ..
            }
            | Segment::Text(_) => None,
        })
    }
}

/// Shorthand for a text segment.
pub fn text(s: impl Into<String>) -> Segment {
    Segment::Text(s.into())
}

/// Shorthand for a field reference segment.
pub fn field_ref(field: impl Into<String>, context: RefContext) -> Segment {
    Segment::FieldRef {
        field: field.into(),
        context,
    }
}
