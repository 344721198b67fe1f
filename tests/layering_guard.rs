//! Layering guardrails to keep the vocabulary crate dependency-free.
//!
//! `objgen_core` holds runtime spellings and naming rules that tooling outside the emitter can reuse. This test scans
//! its `Cargo.toml` and fails if anything appears in `[dependencies]`.

#[test]
fn vocabulary_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/objgen_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        panic!("`objgen_core` must not declare dependencies, found: {line}");
    }
}
