//! Provide the native runtime-support vocabulary and pure naming helpers for the objgen emitter.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that both:
//! - the emitter uses to spell every symbol it writes into an implementation unit, and
//! - tooling (tests, model validators) can use to predict those spellings without running the emitter.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no model types.
//! - The runtime-support library (singleton-table lookup, ownership-transferring assignment, designated-initializer
//!   sentinels, fixed-length arrays) is an external ABI; [`lang::runtime`] only records its spellings.

pub mod lang;
pub mod naming;

pub use lang::reserved::ReservedSymbols;
