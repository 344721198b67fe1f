//! Native-language vocabulary registries.
//!
//! Callers work with stable IDs (e.g. [`primitives::PrimitiveId`]) and look up native spellings via registry tables
//! instead of scattering string literals across the emitter.
//!
//! ## Examples
//! ```rust
//! use objgen_core::lang::primitives::{self, PrimitiveId};
//!
//! assert_eq!(primitives::from_str("int"), Some(PrimitiveId::Int));
//! assert_eq!(primitives::native_name(PrimitiveId::Int), "jint");
//! ```

pub mod primitives;
pub mod reserved;
pub mod runtime;
