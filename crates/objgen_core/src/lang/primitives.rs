//! Define the primitive type vocabulary shared by the object language and the native runtime.
//!
//! Every primitive has three spellings: the object-language name (`int`), the native typedef exported by the
//! runtime-support headers (`jint`), and the selector keyword used when the type appears as a method parameter
//! (`Int`, as in `initWithInt:`).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; object-language keywords are lowercase.
//! - `void` is only valid as a return type. It has no selector keyword.
//!
//! ## Examples
//! ```rust
//! use objgen_core::lang::primitives::{self, PrimitiveId};
//!
//! assert_eq!(primitives::selector_keyword(PrimitiveId::Boolean), Some("Boolean"));
//! assert_eq!(primitives::selector_keyword(PrimitiveId::Void), None);
//! ```

/// Stable identifier for every primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveId {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

/// Metadata for a primitive type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub id: PrimitiveId,
    /// Object-language spelling.
    pub canonical: &'static str,
    /// Native typedef from the runtime-support headers.
    pub native: &'static str,
    /// Selector keyword fragment, `None` for `void`.
    pub keyword: Option<&'static str>,
}

/// Registry of primitive types, in object-language declaration order.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    info(PrimitiveId::Boolean, "boolean", "jboolean", Some("Boolean")),
    info(PrimitiveId::Byte, "byte", "jbyte", Some("Byte")),
    info(PrimitiveId::Char, "char", "jchar", Some("Char")),
    info(PrimitiveId::Short, "short", "jshort", Some("Short")),
    info(PrimitiveId::Int, "int", "jint", Some("Int")),
    info(PrimitiveId::Long, "long", "jlong", Some("Long")),
    info(PrimitiveId::Float, "float", "jfloat", Some("Float")),
    info(PrimitiveId::Double, "double", "jdouble", Some("Double")),
    info(PrimitiveId::Void, "void", "void", None),
];

const fn info(
    id: PrimitiveId,
    canonical: &'static str,
    native: &'static str,
    keyword: Option<&'static str>,
) -> PrimitiveInfo {
    PrimitiveInfo {
        id,
        canonical,
        native,
        keyword,
    }
}

/// Resolve an object-language spelling to a [`PrimitiveId`].
pub fn from_str(name: &str) -> Option<PrimitiveId> {
    PRIMITIVES.iter().find(|p| p.canonical == name).map(|p| p.id)
}

/// Return the registry entry for `id`.
pub fn info_for(id: PrimitiveId) -> &'static PrimitiveInfo {
    // Table order mirrors the enum discriminants.
    &PRIMITIVES[id as usize]
}

/// Return the object-language spelling.
pub fn as_str(id: PrimitiveId) -> &'static str {
    info_for(id).canonical
}

/// Return the native typedef (`jint`, `jboolean`, ...).
pub fn native_name(id: PrimitiveId) -> &'static str {
    info_for(id).native
}

/// Return the selector keyword fragment (`Int` in `initWithInt:`).
pub fn selector_keyword(id: PrimitiveId) -> Option<&'static str> {
    info_for(id).keyword
}
