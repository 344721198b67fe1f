//! Emit method shells around pre-translated bodies.
//!
//! Instance methods become `- (ret)selector` blocks. Static methods become a C function that runs the class
//! initialization guard first, plus a class method forwarding to it, so C callers skip message dispatch.

use objgen_core::lang::runtime;
use objgen_core::naming;

use crate::model::MethodModel;

use super::consts::ConstantPlan;
use super::{Decl, EmitError, Stmt, UnitEmitter, argument_list, selector, signature};

impl<'a> UnitEmitter<'a> {
    pub(super) fn emit_methods(&self, plan: &ConstantPlan<'_>) -> Result<Vec<Decl>, EmitError> {
        let mut decls = Vec::new();
        for method in &self.ty.methods {
            if method.is_static {
                decls.extend(self.static_method(plan, method)?);
            } else {
                decls.push(Decl::block(
                    method.line,
                    format!(
                        "- ({}){}",
                        method.return_type.native(),
                        signature(&method.name, &method.parameters)
                    ),
                    self.render_body(plan, &method.body)?,
                ));
            }
        }
        Ok(decls)
    }

    fn static_method(&self, plan: &ConstantPlan<'_>, method: &MethodModel) -> Result<[Decl; 2], EmitError> {
        let function = naming::function_name(self.native(), &selector(&method.name, &method.parameters));
        let params: Vec<String> = method.parameters.iter().map(|p| p.ty.declare(&p.name)).collect();

        let mut body = vec![Stmt::synthetic(runtime::initialize_call(self.native())), Stmt::blank()];
        body.extend(self.render_body(plan, &method.body)?);
        let function_decl = Decl::block(
            method.line,
            method
                .return_type
                .declare(&format!("{function}({})", params.join(", "))),
            body,
        );

        let call = format!("{function}({})", argument_list(&method.parameters).join(", "));
        let forward = if method.return_type.is_void() {
            format!("{call};")
        } else {
            format!("return {call};")
        };
        let class_method = Decl::block(
            method.line,
            format!(
                "+ ({}){}",
                method.return_type.native(),
                signature(&method.name, &method.parameters)
            ),
            vec![Stmt::synthetic(forward)],
        );
        Ok([function_decl, class_method])
    }
}
