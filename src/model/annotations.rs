//! Annotation bindings attached to fields.

use objgen_core::lang::runtime;
use serde::{Deserialize, Serialize};

use super::ConstantExpr;

/// How long an annotation's metadata survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Retention {
    /// Discarded by the compiler.
    Source,
    /// Kept in compiled artifacts, invisible to reflection.
    Class,
    /// Reflectable at runtime.
    Runtime,
}

impl Retention {
    /// Whether reflective queries observe bindings with this retention.
    pub fn is_reflectable(self) -> bool {
        match self {
            Retention::Source | Retention::Class => false,
            Retention::Runtime => true,
        }
    }
}

/// One declared member of an annotation type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMember {
    pub name: String,
    #[serde(default)]
    pub default: Option<AnnotationValue>,
}

/// Resolved annotation type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationTypeRef {
    /// Object-language qualified name (`java.lang.Deprecated`).
    pub qualified_name: String,
    /// Native class name (`JavaLangDeprecated`).
    pub native_name: String,
    /// Declared members in declaration order. Empty for marker annotations.
    #[serde(default)]
    pub members: Vec<AnnotationMember>,
}

impl AnnotationTypeRef {
    /// Annotation type with no members.
    pub fn marker(qualified_name: impl Into<String>, native_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            native_name: native_name.into(),
            members: Vec::new(),
        }
    }

    pub fn is_marker(&self) -> bool {
        self.members.is_empty()
    }
}

/// A member value as folded by the resolver.
///
/// JSON form is externally tagged: `{"constant": {"int": 1}}`, `{"class": "NSString"}`, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationValue {
    Constant(ConstantExpr),
    Enum { native_type: String, constant: String },
    /// Native class name of a class literal.
    Class(String),
    Annotation(Box<AnnotationBinding>),
    Array(Vec<AnnotationValue>),
}

/// An annotation applied to a declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationBinding {
    pub annotation: AnnotationTypeRef,
    pub retention: Retention,
    /// Explicit member values, in source order.
    #[serde(default)]
    pub member_values: Vec<(String, AnnotationValue)>,
}

impl AnnotationBinding {
    pub fn new(annotation: AnnotationTypeRef, retention: Retention) -> Self {
        Self {
            annotation,
            retention,
            member_values: Vec::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.member_values.push((name.into(), value));
        self
    }

    /// Explicit value for `member`, if one was written at the use site.
    pub fn explicit_value(&self, member: &str) -> Option<&AnnotationValue> {
        self.member_values.iter().find(|(name, _)| name == member).map(|(_, v)| v)
    }

    /// Whether this binding is the property-mapping annotation.
    pub fn is_property_mapping(&self) -> bool {
        self.annotation.qualified_name == runtime::PROPERTY_ANNOTATION
    }
}
