//! Emit runtime annotation metadata accessors.
//!
//! Reflection in the native runtime asks a class for `__annotations_<field>_` and expects a fixed-length array of
//! freshly built annotation instances. Only bindings with runtime retention are visible; the filter applies the same
//! way on every type kind.

use objgen_core::lang::runtime;
use objgen_core::naming;

use crate::model::{AnnotationBinding, AnnotationValue, FieldModel};

use super::{Decl, EmitError, Stmt, UnitEmitter};

impl<'a> UnitEmitter<'a> {
    pub(super) fn emit_annotation_accessors(&self) -> Result<Vec<Decl>, EmitError> {
        let mut decls = Vec::new();
        for field in &self.ty.fields {
            let instances = field
                .reflectable_annotations()
                .map(|binding| self.annotation_instance(field, binding))
                .collect::<Result<Vec<_>, _>>()?;
            if instances.is_empty() {
                continue;
            }
            let array = runtime::object_array(&instances, runtime::ANNOTATION_ELEMENT_TYPE);
            decls.push(Decl::block(
                field.line,
                format!(
                    "+ ({} *){}",
                    runtime::OBJECT_ARRAY,
                    naming::annotations_accessor_name(&field.name)
                ),
                vec![Stmt::sourced(field.line, format!("return {array};"))],
            ));
        }
        Ok(decls)
    }

    /// Construct one annotation instance, populating every declared member.
    fn annotation_instance(&self, field: &FieldModel, binding: &AnnotationBinding) -> Result<String, EmitError> {
        let annotation = &binding.annotation;
        if let Some((name, _)) = binding
            .member_values
            .iter()
            .find(|(name, _)| !annotation.members.iter().any(|m| &m.name == name))
        {
            return Err(self.malformed(
                &field.name,
                field.line,
                format!("`{}` has no member `{name}`", annotation.qualified_name),
            ));
        }
        if annotation.is_marker() {
            return Ok(runtime::autoreleased_instance(&annotation.native_name, "init"));
        }

        let mut parts = Vec::with_capacity(annotation.members.len());
        for (idx, member) in annotation.members.iter().enumerate() {
            let Some(value) = binding.explicit_value(&member.name).or(member.default.as_ref()) else {
                return Err(self.malformed(
                    &field.name,
                    field.line,
                    format!(
                        "`{}` member `{}` has neither a value nor a default",
                        annotation.qualified_name, member.name
                    ),
                ));
            };
            let keyword = if idx == 0 { "initWith" } else { "with" };
            parts.push(format!(
                "{keyword}{}:{}",
                naming::capitalize(&member.name),
                self.annotation_value(field, value)?
            ));
        }
        Ok(runtime::autoreleased_instance(&annotation.native_name, &parts.join(" ")))
    }

    fn annotation_value(&self, field: &FieldModel, value: &AnnotationValue) -> Result<String, EmitError> {
        match value {
            AnnotationValue::Constant(constant) => Ok(constant.literal()),
            AnnotationValue::Enum { native_type, constant } => Ok(runtime::enum_lookup(native_type, constant)),
            AnnotationValue::Class(native) => Ok(runtime::class_literal(native)),
            AnnotationValue::Annotation(nested) => self.annotation_instance(field, nested),
            AnnotationValue::Array(values) => {
                let elements = values
                    .iter()
                    .map(|v| self.annotation_value(field, v))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(runtime::object_array(&elements, runtime::OBJECT_ELEMENT_TYPE))
            }
        }
    }
}
