//! Emit class-method accessors for static fields.
//!
//! Opt-in via [`EmitConfig::static_accessor_methods`](crate::config::EmitConfig): it gives C-linkage callers a way
//! into static state at the cost of a larger runtime-visible symbol surface. Private fields never get accessors;
//! final fields get a getter only.

use objgen_core::lang::runtime;
use objgen_core::naming;

use crate::model::FieldModel;

use super::{Decl, Stmt, UnitEmitter};

impl<'a> UnitEmitter<'a> {
    pub(super) fn emit_static_accessors(&self) -> Vec<Decl> {
        if !self.config.static_accessor_methods {
            return Vec::new();
        }
        let mut decls = Vec::new();
        for field in self.ty.fields.iter().filter(|f| f.is_static && !f.is_private) {
            decls.push(self.static_getter(field));
            if !field.is_final {
                decls.push(self.static_setter(field));
            }
        }
        decls
    }

    fn static_getter(&self, field: &FieldModel) -> Decl {
        let symbol = naming::static_symbol(self.native(), &field.name);
        Decl::block(
            field.line,
            format!("+ ({}){}", field.declared_type.native(), naming::getter_name(&field.name)),
            vec![Stmt::sourced(field.line, format!("return {symbol};"))],
        )
    }

    fn static_setter(&self, field: &FieldModel) -> Decl {
        let symbol = naming::static_symbol(self.native(), &field.name);
        // Objects go through the runtime's ownership-transferring assignment; values are copied.
        let assignment = if field.declared_type.is_retained() {
            runtime::strong_assign(&symbol, "value")
        } else {
            format!("{symbol} = value;")
        };
        Decl::block(
            field.line,
            format!(
                "+ (void){}:({})value",
                naming::setter_name(&field.name),
                field.declared_type.native()
            ),
            vec![Stmt::sourced(field.line, assignment)],
        )
    }
}
