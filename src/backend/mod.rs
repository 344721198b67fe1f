//! Objective-C implementation-unit backend
//!
//! This module turns a resolved [`TypeModel`](crate::model::TypeModel) into the text of its `.m` implementation
//! unit.
//!
//! The pipeline is:
//! 1. Validate the model (designated initializer chain, enum ordinals, annotation members)
//! 2. Run each section synthesizer against the read-only model and configuration
//! 3. Concatenate sections in a fixed order, interleaving `#line` markers when enabled
//!
//! ## Module Organization
//!
//! - `emit/` - Per-section synthesizers and the unit renderer
//!   - `consts.rs` - Constant materialization, static storage, field references
//!   - `initializers.rs` - Designated initializer chain
//!   - `statics.rs`, `enums.rs` - Class-method accessors
//!   - `annotations.rs` - Runtime annotation metadata
//!   - `properties.rs` - `@synthesize` bindings
//!   - `methods.rs` - Method shells
//!   - `lines.rs` - `#line` markers
//!   - `unit.rs` - Section ordering and final text
//! - `writer.rs` - Low-level indentation-aware text builder
//! - `batch.rs` - Multi-unit rendering with per-unit failure isolation

#![deny(clippy::unwrap_used)]

pub mod batch;
pub mod emit;
pub mod writer;

pub use batch::{UnitOutput, render_batch, report_diagnostics};
pub use emit::{EmitError, Section, UnitEmitter};

use objgen_core::ReservedSymbols;

use crate::config::EmitConfig;
use crate::model::TypeModel;

/// Render one implementation unit.
pub fn render_unit(ty: &TypeModel, config: &EmitConfig, reserved: &ReservedSymbols) -> Result<String, EmitError> {
    UnitEmitter::new(ty, config, reserved).render()
}
