//! Emission configuration for a translation run.
//!
//! One [`EmitConfig`] is built before any unit is rendered and passed by reference into every synthesizer. It is
//! never stored in global state, which keeps concurrently rendered units independent.

use serde::{Deserialize, Serialize};

/// Generation options that affect implementation-unit text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitConfig {
    /// Interleave `#line` markers mapping emitted code back to object-language source lines.
    #[serde(default)]
    pub emit_line_directives: bool,
    /// Emit class-method accessors for static fields and enum constants.
    #[serde(default)]
    pub static_accessor_methods: bool,
}

impl EmitConfig {
    /// Create a new config with every option off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `#line` markers are emitted
    pub fn with_line_directives(mut self, enabled: bool) -> Self {
        self.emit_line_directives = enabled;
        self
    }

    /// Set whether static field and enum constant accessors are emitted
    pub fn with_static_accessor_methods(mut self, enabled: bool) -> Self {
        self.static_accessor_methods = enabled;
        self
    }
}
