//! Materialize compile-time constants and render field references.
//!
//! The object language lets a `final` field with a constant initializer appear where a compile-time constant is
//! required (a `case` label), whether or not the field is static. The native language needs a true literal there,
//! so such fields become `#define <Type>_<field> <literal>` and every reference renders as that name. A field that
//! is not materialized is read with a live load.
//!
//! This module also emits file-scope storage for the remaining static fields.

use std::collections::BTreeSet;

use objgen_core::lang::runtime;
use objgen_core::naming;

use crate::model::{FieldModel, RefContext, Segment, StatementModel, TypeModel};

use super::{Decl, EmitError, Stmt, UnitEmitter};

/// Fields selected for materialization, in declaration order.
#[derive(Debug, Default)]
pub(super) struct ConstantPlan<'m> {
    fields: Vec<&'m FieldModel>,
}

impl<'m> ConstantPlan<'m> {
    pub(super) fn is_materialized(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.name == field)
    }
}

impl<'a> UnitEmitter<'a> {
    /// Decide which fields are materialized as named constants.
    ///
    /// A field qualifies when upstream flagged it `constant_required` or some body references it from a
    /// constant-required position. Qualifying fields must be `final` and carry a folded value.
    pub(super) fn constant_plan(&self) -> Result<ConstantPlan<'a>, EmitError> {
        let ty: &'a TypeModel = self.ty;
        let mut referenced: BTreeSet<&str> = BTreeSet::new();
        for stmt in ty.statements() {
            for name in stmt.constant_refs() {
                if ty.field(name).is_none() {
                    return Err(self.malformed(
                        name,
                        stmt.line,
                        "constant-required reference to an undeclared field",
                    ));
                }
                referenced.insert(name);
            }
        }

        let mut fields = Vec::new();
        for field in &ty.fields {
            if !field.constant_required && !referenced.contains(field.name.as_str()) {
                continue;
            }
            if field.initializer.is_none() {
                return Err(self.malformed(
                    &field.name,
                    field.line,
                    "field is required to be a compile-time constant but has no folded value",
                ));
            }
            if !field.is_final {
                return Err(self.malformed(
                    &field.name,
                    field.line,
                    "field is required to be a compile-time constant but is not final",
                ));
            }
            tracing::debug!(field = %field.name, "materializing constant");
            fields.push(field);
        }
        Ok(ConstantPlan { fields })
    }

    /// `#define` lines for every materialized field.
    pub(super) fn emit_constants(&self, plan: &ConstantPlan<'_>) -> Vec<Decl> {
        plan.fields
            .iter()
            .filter_map(|field| {
                let value = field.initializer.as_ref()?;
                Some(Decl::single(
                    field.line,
                    format!("#define {} {}", naming::static_symbol(self.native(), &field.name), value.literal()),
                ))
            })
            .collect()
    }

    /// File-scope storage for static fields that were not materialized.
    pub(super) fn emit_static_storage(&self, plan: &ConstantPlan<'_>) -> Vec<Decl> {
        self.ty
            .fields
            .iter()
            .filter(|f| f.is_static && !plan.is_materialized(&f.name))
            .map(|field| {
                let declaration = field
                    .declared_type
                    .declare(&naming::static_symbol(self.native(), &field.name));
                let text = match &field.initializer {
                    Some(value) => format!("{declaration} = {};", value.literal()),
                    None => format!("{declaration};"),
                };
                Decl::single(field.line, text)
            })
            .collect()
    }

    /// Render a pre-translated body, filling in field references.
    pub(super) fn render_body(
        &self,
        plan: &ConstantPlan<'_>,
        body: &[StatementModel],
    ) -> Result<Vec<Stmt>, EmitError> {
        body.iter()
            .map(|stmt| Ok(Stmt::sourced(stmt.line, self.render_statement(plan, stmt)?)))
            .collect()
    }

    fn render_statement(&self, plan: &ConstantPlan<'_>, stmt: &StatementModel) -> Result<String, EmitError> {
        let mut out = String::new();
        for segment in &stmt.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::FieldRef { field, context } => {
                    out.push_str(&self.render_field_ref(plan, field, *context, stmt.line)?);
                }
            }
        }
        Ok(out)
    }

    fn render_field_ref(
        &self,
        plan: &ConstantPlan<'_>,
        name: &str,
        context: RefContext,
        line: u32,
    ) -> Result<String, EmitError> {
        let Some(field) = self.ty.field(name) else {
            return Err(self.malformed(name, line, "reference to an undeclared field"));
        };
        // Materialized fields are compile-time constants; every reference inlines the name.
        if plan.is_materialized(name) {
            return Ok(naming::static_symbol(self.native(), name));
        }
        match context {
            RefContext::ConstantRequired => Err(self.malformed(name, line, "constant reference was not materialized")),
            RefContext::Value if field.is_static => Ok(runtime::load_static(self.native(), name)),
            RefContext::Value => Ok(format!("self->{}", naming::ivar_name(name))),
        }
    }
}
