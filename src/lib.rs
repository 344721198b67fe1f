#![forbid(unsafe_code)]
//! Objective-C implementation-unit emitter
//!
//! objgen takes the resolved semantic model of one object-language type (class, interface, or enumeration) and renders
//! the native implementation unit that gives it runtime behavior: materialized constants, static storage and
//! accessors, enum singletons, annotation metadata, property bindings, the designated-initializer chain, and method
//! shells.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Model contract breaches**: A model that violates the emitter's input contract is reported as an
//!   [`EmitError`], never a panic, and aborts only the affected unit.

pub mod backend;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod model;

pub use backend::{EmitError, UnitEmitter, UnitOutput, render_batch, render_unit};
pub use config::EmitConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use objgen_core::ReservedSymbols;
