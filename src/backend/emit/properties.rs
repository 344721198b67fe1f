//! Emit `@synthesize` bindings for fields that opted into property synthesis.

use objgen_core::naming;

use super::{Decl, UnitEmitter};

impl<'a> UnitEmitter<'a> {
    /// Only instance fields have an ivar to bind; a mapped static field is skipped.
    pub(super) fn emit_property_bindings(&self) -> Vec<Decl> {
        self.ty
            .fields
            .iter()
            .filter(|field| !field.is_static && field.property_mapping().is_some())
            .map(|field| {
                Decl::single(
                    field.line,
                    format!("@synthesize {} = {};", field.name, naming::ivar_name(&field.name)),
                )
            })
            .collect()
    }
}
