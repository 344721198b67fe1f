//! Declared types as the emitter sees them: primitives (copied) or native object classes (reference counted).

use objgen_core::lang::primitives::{self, PrimitiveId};
use serde::{Deserialize, Serialize};

/// Object-language primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
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

impl PrimitiveType {
    /// Vocabulary ID for registry lookups.
    pub fn id(self) -> PrimitiveId {
        match self {
            PrimitiveType::Boolean => PrimitiveId::Boolean,
            PrimitiveType::Byte => PrimitiveId::Byte,
            PrimitiveType::Char => PrimitiveId::Char,
            PrimitiveType::Short => PrimitiveId::Short,
            PrimitiveType::Int => PrimitiveId::Int,
            PrimitiveType::Long => PrimitiveId::Long,
            PrimitiveType::Float => PrimitiveId::Float,
            PrimitiveType::Double => PrimitiveId::Double,
            PrimitiveType::Void => PrimitiveId::Void,
        }
    }
}

/// A resolved declared type.
///
/// JSON form: `{"primitive": "int"}` or `{"object": "NSString"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Primitive(PrimitiveType),
    /// Native class name, already prefixed (`NSString`, `ComExampleTest`).
    Object(String),
}

impl TypeRef {
    pub fn object(native_name: impl Into<String>) -> Self {
        TypeRef::Object(native_name.into())
    }

    /// Whether values of this type are reference counted (and must be retained/released on assignment).
    pub fn is_retained(&self) -> bool {
        matches!(self, TypeRef::Object(_))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Primitive(PrimitiveType::Void))
    }

    /// Spelling in a method signature or cast: `jint`, `NSString *`.
    pub fn native(&self) -> String {
        match self {
            TypeRef::Primitive(p) => primitives::native_name(p.id()).to_string(),
            TypeRef::Object(name) => format!("{name} *"),
        }
    }

    /// Declaration of a variable of this type: `jint Test_i`, `NSString *Test_ID`.
    pub fn declare(&self, name: &str) -> String {
        match self {
            TypeRef::Primitive(p) => format!("{} {name}", primitives::native_name(p.id())),
            TypeRef::Object(native) => format!("{native} *{name}"),
        }
    }

    /// Selector keyword used when this type names a parameter (`Int`, `NSString`).
    pub fn selector_keyword(&self) -> &str {
        match self {
            // `void` parameters are rejected upstream; fall back to its canonical spelling.
            TypeRef::Primitive(p) => primitives::selector_keyword(p.id()).unwrap_or(primitives::as_str(p.id())),
            TypeRef::Object(name) => name,
        }
    }
}
