//! Resolved semantic model of one type declaration.
//!
//! The model is produced by upstream passes (parser, resolver, constant folder) and borrowed read-only by the
//! emitter for the duration of one unit's rendering. Nothing in `backend` mutates it.
//!
//! ## Notes
//! - All types are serde-deserializable; JSON is the interchange format read by the CLI (see [`load`]).
//! - Constructors on these types are conveniences for tests and tools that build models by hand.

mod annotations;
mod body;
mod constants;
pub mod load;
mod types;

pub use annotations::{AnnotationBinding, AnnotationMember, AnnotationTypeRef, AnnotationValue, Retention};
pub use body::{RefContext, Segment, StatementModel, field_ref, text};
pub use constants::ConstantExpr;
pub use load::{ModelError, load_types, parse_types};
pub use types::{PrimitiveType, TypeRef};

use serde::{Deserialize, Serialize};

/// Kind of type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
}

/// One type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeModel {
    /// Object-language simple name.
    pub name: String,
    /// Native (prefixed) name every emitted symbol derives from.
    pub native_name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub fields: Vec<FieldModel>,
    #[serde(default)]
    pub methods: Vec<MethodModel>,
    #[serde(default)]
    pub constructors: Vec<ConstructorModel>,
    #[serde(default)]
    pub enum_constants: Vec<EnumConstantModel>,
    #[serde(default)]
    pub superclass: Option<String>,
}

impl TypeModel {
    /// Empty declaration whose native name equals its simple name.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        let name = name.into();
        Self {
            native_name: name.clone(),
            name,
            kind,
            line: 1,
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            enum_constants: Vec::new(),
            superclass: None,
        }
    }

    pub fn with_native_name(mut self, native_name: impl Into<String>) -> Self {
        self.native_name = native_name.into();
        self
    }

    pub fn with_field(mut self, field: FieldModel) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodModel) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorModel) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Append enum constants with ordinals following declaration order.
    pub fn with_enum_constants<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        for name in names {
            let ordinal = self.enum_constants.len() as u32;
            self.enum_constants.push(EnumConstantModel {
                logical_name: name.into(),
                ordinal,
                line: self.line,
            });
        }
        self
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Every statement of every constructor and method body, in declaration order.
    pub fn statements(&self) -> impl Iterator<Item = &StatementModel> {
        self.constructors
            .iter()
            .flat_map(|c| c.body.iter())
            .chain(self.methods.iter().flat_map(|m| m.body.iter()))
    }
}

/// A declared field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldModel {
    pub name: String,
    pub declared_type: TypeRef,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub is_private: bool,
    /// Set by upstream analysis when the field is used where a compile-time constant is required.
    #[serde(default)]
    pub constant_required: bool,
    #[serde(default)]
    pub initializer: Option<ConstantExpr>,
    #[serde(default)]
    pub annotations: Vec<AnnotationBinding>,
    #[serde(default)]
    pub line: u32,
}

impl FieldModel {
    /// Non-static, non-final, package-visible field.
    pub fn new(name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declared_type,
            is_static: false,
            is_final: false,
            is_private: false,
            constant_required: false,
            initializer: None,
            annotations: Vec::new(),
            line: 1,
        }
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn with_private(mut self) -> Self {
        self.is_private = true;
        self
    }

    pub fn with_constant_required(mut self) -> Self {
        self.constant_required = true;
        self
    }

    pub fn with_initializer(mut self, value: ConstantExpr) -> Self {
        self.initializer = Some(value);
        self
    }

    pub fn with_annotation(mut self, binding: AnnotationBinding) -> Self {
        self.annotations.push(binding);
        self
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Bindings visible to runtime reflection, in declaration order.
    pub fn reflectable_annotations(&self) -> impl Iterator<Item = &AnnotationBinding> {
        self.annotations.iter().filter(|a| a.retention.is_reflectable())
    }

    /// The property-mapping binding, if the field opted into property synthesis.
    pub fn property_mapping(&self) -> Option<&AnnotationBinding> {
        self.annotations.iter().find(|a| a.is_property_mapping())
    }
}

/// A declared method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterModel {
    pub name: String,
    pub ty: TypeRef,
}

impl ParameterModel {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self { name: name.into(), ty }
    }
}

/// An explicit `this(...)` call at the start of a constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    /// Index of the target constructor in [`TypeModel::constructors`].
    pub target: usize,
    /// Pre-translated argument expressions.
    #[serde(default)]
    pub arguments: Vec<String>,
}

/// A declared constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorModel {
    #[serde(default)]
    pub parameters: Vec<ParameterModel>,
    #[serde(default)]
    pub is_designated_candidate: bool,
    #[serde(default)]
    pub delegates_to: Option<Delegation>,
    /// Body statements, excluding the delegation call itself.
    #[serde(default)]
    pub body: Vec<StatementModel>,
    #[serde(default)]
    pub line: u32,
}

impl ConstructorModel {
    pub fn new(parameters: Vec<ParameterModel>) -> Self {
        Self {
            parameters,
            is_designated_candidate: false,
            delegates_to: None,
            body: Vec::new(),
            line: 1,
        }
    }

    pub fn designated(mut self) -> Self {
        self.is_designated_candidate = true;
        self
    }

    pub fn delegating(mut self, target: usize, arguments: Vec<String>) -> Self {
        self.delegates_to = Some(Delegation { target, arguments });
        self
    }

    pub fn with_body(mut self, body: Vec<StatementModel>) -> Self {
        self.body = body;
        self
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }
}

/// A declared method with a pre-translated body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<ParameterModel>,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub body: Vec<StatementModel>,
    #[serde(default)]
    pub line: u32,
}

impl MethodModel {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
            is_static: false,
            body: Vec::new(),
            line: 1,
        }
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterModel) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_body(mut self, body: Vec<StatementModel>) -> Self {
        self.body = body;
        self
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }
}

/// One constant of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumConstantModel {
    /// Name exposed to the object-language program (and to reflection).
    pub logical_name: String,
    pub ordinal: u32,
    #[serde(default)]
    pub line: u32,
}
