//! Emit class-method accessors for enum constants.
//!
//! The emitted method name is renamed with a trailing underscore when the constant's logical name collides with a
//! reserved symbol (`EOF` → `EOF_`). The singleton-table lookup always receives the logical name; only the native
//! method symbol changes.

use objgen_core::lang::runtime;
use objgen_core::naming;

use crate::model::TypeKind;

use super::{Decl, EmitError, Stmt, UnitEmitter};

impl<'a> UnitEmitter<'a> {
    /// Check that ordinals are dense, 0-based, and in declaration order, and that only enums declare constants.
    pub(super) fn validate_enum_constants(&self) -> Result<(), EmitError> {
        match self.ty.kind {
            TypeKind::Enum => {}
            TypeKind::Class | TypeKind::Interface => {
                return match self.ty.enum_constants.first() {
                    Some(constant) => Err(self.malformed(
                        &constant.logical_name,
                        constant.line,
                        "enum constant declared on a non-enum type",
                    )),
                    None => Ok(()),
                };
            }
        }
        for (expected, constant) in self.ty.enum_constants.iter().enumerate() {
            if constant.ordinal as usize != expected {
                return Err(self.malformed(
                    &constant.logical_name,
                    constant.line,
                    format!("ordinal {} out of sequence, expected {expected}", constant.ordinal),
                ));
            }
        }
        Ok(())
    }

    pub(super) fn emit_enum_accessors(&self) -> Vec<Decl> {
        if !self.config.static_accessor_methods {
            return Vec::new();
        }
        match self.ty.kind {
            TypeKind::Enum => {}
            TypeKind::Class | TypeKind::Interface => return Vec::new(),
        }
        self.ty
            .enum_constants
            .iter()
            .map(|constant| {
                let emitted = naming::enum_accessor_name(&constant.logical_name, self.reserved);
                if emitted != constant.logical_name {
                    tracing::debug!(constant = %constant.logical_name, %emitted, "renamed reserved enum accessor");
                }
                Decl::block(
                    constant.line,
                    format!("+ ({} *){emitted}", self.native()),
                    vec![Stmt::sourced(
                        constant.line,
                        format!("return {};", runtime::enum_lookup(self.native(), &constant.logical_name)),
                    )],
                )
            })
            .collect()
    }
}
