//! Emit the implementation unit for one type declaration.
//!
//! This module defines [`UnitEmitter`] and wires together the focused submodules that each synthesize one group of
//! declarations. The heavy lifting lives in those submodules; `mod.rs` only holds the shared fragment types.
//!
//! ## Notes
//! - Every synthesizer is a pure function of `(TypeModel, EmitConfig, ReservedSymbols)` returning a list of
//!   [`Decl`]s. None of them reads another's output; [`unit`] concatenates them in [`Section::ORDER`].
//! - Runtime-support spellings come from `objgen_core::lang::runtime` and must not be reimplemented ad-hoc here.
//!
//! ## See also
//! - [`consts`]: constant materialization, static storage, field-reference rendering
//! - [`initializers`]: designated-initializer validation and constructor wrappers
//! - [`statics`]: static field accessors
//! - [`enums`]: enum constant accessors
//! - [`annotations`]: runtime annotation metadata accessors
//! - [`properties`]: property storage bindings
//! - [`methods`]: method shells
//! - [`lines`]: `#line` marker interleaving
//! - [`unit`]: section ordering and final text

mod annotations;
mod consts;
mod enums;
mod errors;
mod initializers;
mod lines;
mod methods;
mod properties;
mod statics;
mod unit;

pub use errors::EmitError;
pub use lines::LineMapper;

use objgen_core::ReservedSymbols;

use crate::config::EmitConfig;
use crate::model::{ParameterModel, TypeModel};

/// Emit one implementation unit.
///
/// Borrowed inputs are read-only, so one `UnitEmitter` per type can run on any worker thread.
pub struct UnitEmitter<'a> {
    ty: &'a TypeModel,
    config: &'a EmitConfig,
    reserved: &'a ReservedSymbols,
}

impl<'a> UnitEmitter<'a> {
    pub fn new(ty: &'a TypeModel, config: &'a EmitConfig, reserved: &'a ReservedSymbols) -> Self {
        Self { ty, config, reserved }
    }

    /// Native name every symbol in this unit is prefixed with.
    fn native(&self) -> &'a str {
        &self.ty.native_name
    }

    fn malformed(&self, member: &str, line: u32, reason: impl Into<String>) -> EmitError {
        EmitError::malformed(&self.ty.name, member, line, reason)
    }
}

/// Output sections of an implementation unit, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// `#define`d constants and static storage, at file scope.
    Constants,
    StaticAccessors,
    EnumAccessors,
    AnnotationAccessors,
    PropertyBindings,
    /// Designated initializer first, then delegating wrappers.
    Constructors,
    Methods,
}

impl Section {
    /// The fixed emission order. Output must be reproducible and diffable, so this is part of the contract.
    pub const ORDER: [Section; 7] = [
        Section::Constants,
        Section::StaticAccessors,
        Section::EnumAccessors,
        Section::AnnotationAccessors,
        Section::PropertyBindings,
        Section::Constructors,
        Section::Methods,
    ];

    /// Whether the section lives at file scope, before `@implementation`.
    pub fn is_file_scope(self) -> bool {
        match self {
            Section::Constants => true,
            Section::StaticAccessors
            | Section::EnumAccessors
            | Section::AnnotationAccessors
            | Section::PropertyBindings
            | Section::Constructors
            | Section::Methods => false,
        }
    }
}

/// One statement inside a declaration body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    /// Originating source line; `None` for synthetic statements (no `#line` marker is ever written for them).
    pub line: Option<u32>,
    pub text: String,
}

impl Stmt {
    pub fn sourced(line: u32, text: impl Into<String>) -> Self {
        Self {
            line: Some(line),
            text: text.into(),
        }
    }

    pub fn synthetic(text: impl Into<String>) -> Self {
        Self {
            line: None,
            text: text.into(),
        }
    }

    /// Empty separator line inside a body.
    pub fn blank() -> Self {
        Self::synthetic("")
    }
}

/// One emitted top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl {
    /// Source line of the construct this declaration came from.
    pub line: u32,
    /// Unindented lines before the body.
    pub head: Vec<String>,
    /// Indented body statements.
    pub body: Vec<Stmt>,
    /// Unindented lines after the body.
    pub tail: Vec<String>,
}

impl Decl {
    /// Single-line declaration (`#define`, storage, `@synthesize`).
    pub fn single(line: u32, text: impl Into<String>) -> Self {
        Self {
            line,
            head: vec![text.into()],
            body: Vec::new(),
            tail: Vec::new(),
        }
    }

    /// Braced declaration: `header {`, body, `}`.
    pub fn block(line: u32, header: impl AsRef<str>, body: Vec<Stmt>) -> Self {
        Self {
            line,
            head: vec![format!("{} {{", header.as_ref())],
            body,
            tail: vec!["}".to_string()],
        }
    }

    /// Wrap the declaration in a pair of sentinel lines.
    pub fn bracketed(mut self, begin: &str, end: &str) -> Self {
        self.head.insert(0, begin.to_string());
        self.tail.push(end.to_string());
        self
    }
}

/// Method signature after the return type: `initWithInt:(jint)i withNSString:(NSString *)s`.
fn signature(base: &str, params: &[ParameterModel]) -> String {
    if params.is_empty() {
        return base.to_string();
    }
    params
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let keyword = p.ty.selector_keyword();
            let part = if idx == 0 {
                format!("{base}With{keyword}")
            } else {
                format!("with{keyword}")
            };
            format!("{part}:({}){}", p.ty.native(), p.name)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bare selector: `initWithInt:withNSString:`.
fn selector(base: &str, params: &[ParameterModel]) -> String {
    let keywords: Vec<&str> = params.iter().map(|p| p.ty.selector_keyword()).collect();
    objgen_core::naming::selector(base, &keywords)
}

/// Parameter names joined as call arguments.
fn argument_list(params: &[ParameterModel]) -> Vec<String> {
    params.iter().map(|p| p.name.clone()).collect()
}
