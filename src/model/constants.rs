//! Pre-folded compile-time constant values and their native literal spellings.
//!
//! Constant folding happens upstream; this module only spells already-folded values so they are valid in a native
//! constant context (`case` labels, `#define` bodies, file-scope initializers).

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// A folded constant value.
///
/// JSON form is externally tagged: `{"int": 1}`, `{"string": "x"}`, `"null"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantExpr {
    Bool(bool),
    Byte(i8),
    /// UTF-16 code unit.
    Char(u16),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Null,
}

impl ConstantExpr {
    /// Native literal spelling.
    pub fn literal(&self) -> String {
        match self {
            ConstantExpr::Bool(b) => b.to_string(),
            ConstantExpr::Byte(v) => v.to_string(),
            ConstantExpr::Short(v) => v.to_string(),
            ConstantExpr::Int(v) if *v == i32::MIN => "(-0x7fffffff - 1)".to_string(),
            ConstantExpr::Int(v) => v.to_string(),
            ConstantExpr::Long(v) if *v == i64::MIN => "(-0x7fffffffffffffffLL - 1)".to_string(),
            ConstantExpr::Long(v) => format!("{v}LL"),
            ConstantExpr::Char(c) => char_literal(*c),
            ConstantExpr::Float(v) => float_literal(f64::from(*v), &format!("{v:?}"), "f"),
            ConstantExpr::Double(v) => float_literal(*v, &format!("{v:?}"), ""),
            ConstantExpr::String(s) => string_literal(s),
            ConstantExpr::Null => "nil".to_string(),
        }
    }
}

fn float_literal(value: f64, debug: &str, suffix: &str) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INFINITY" } else { "-INFINITY" }.to_string();
    }
    format!("{debug}{suffix}")
}

fn char_literal(unit: u16) -> String {
    match unit {
        0x27 => "'\\''".to_string(),
        0x5c => "'\\\\'".to_string(),
        0x20..=0x7e => format!("'{}'", char::from(unit as u8)),
        _ => format!("0x{unit:04x}"),
    }
}

/// Objective-C string literal: `@"..."` with C escapes and universal character names for non-ASCII.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 3);
    out.push_str("@\"");
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c if c.is_ascii() => out.push(c),
            c if (c as u32) <= 0xffff => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => {
                let _ = write!(out, "\\U{:08x}", c as u32);
            }
        }
    }
    out.push('"');
    out
}
