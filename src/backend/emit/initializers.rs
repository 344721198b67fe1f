//! Validate the designated-initializer chain and emit constructors.
//!
//! The native object model requires one designated initializer per class that every other initializer funnels into.
//! Exactly one constructor must be marked as the candidate; choosing among several silently would produce a unit
//! that compiles but initializes the wrong state, so zero or several is an error.
//!
//! The designated constructor's body is emitted as a C routine `<Native>_<sel_>(self, ...)` that peers call
//! directly. Its Objective-C wrapper sits between the sentinel markers because the ancestor chain declares a
//! different designated signature.

use objgen_core::lang::runtime;
use objgen_core::naming;

use crate::model::ConstructorModel;

use super::consts::ConstantPlan;
use super::{Decl, EmitError, Stmt, UnitEmitter, argument_list, selector, signature};

const INIT: &str = "init";

impl<'a> UnitEmitter<'a> {
    /// Index of the designated constructor, or `None` when the type declares no constructors.
    pub(super) fn designated_index(&self) -> Result<Option<usize>, EmitError> {
        let constructors = &self.ty.constructors;
        if constructors.is_empty() {
            return Ok(None);
        }
        let candidates: Vec<usize> = constructors
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_designated_candidate)
            .map(|(idx, _)| idx)
            .collect();
        let [designated] = candidates[..] else {
            // Point at the second candidate, or at the type when none was marked.
            let (member, line) = match candidates.get(1) {
                Some(&idx) => (
                    selector(INIT, &constructors[idx].parameters),
                    constructors[idx].line,
                ),
                None => (INIT.to_string(), self.ty.line),
            };
            return Err(EmitError::AmbiguousDesignatedInitializer {
                type_name: self.ty.name.clone(),
                selector: member,
                line,
                found: candidates.len(),
            });
        };

        let chosen = &constructors[designated];
        if chosen.delegates_to.is_some() {
            return Err(self.malformed(INIT, chosen.line, "designated constructor delegates to a peer"));
        }
        for (idx, constructor) in constructors.iter().enumerate() {
            if idx == designated {
                continue;
            }
            match &constructor.delegates_to {
                Some(delegation) if delegation.target == designated => {}
                Some(delegation) => {
                    return Err(self.malformed(
                        INIT,
                        constructor.line,
                        format!(
                            "constructor delegates to #{} instead of the designated constructor #{designated}",
                            delegation.target
                        ),
                    ));
                }
                None => {
                    return Err(self.malformed(
                        INIT,
                        constructor.line,
                        "non-designated constructor does not delegate",
                    ));
                }
            }
        }
        Ok(Some(designated))
    }

    /// Designated routine and wrapper first, then delegating wrappers in declaration order.
    pub(super) fn emit_constructors(&self, plan: &ConstantPlan<'_>) -> Result<Vec<Decl>, EmitError> {
        let Some(designated) = self.designated_index()? else {
            return Ok(Vec::new());
        };
        let constructors = &self.ty.constructors;
        let target = &constructors[designated];
        let routine = naming::function_name(self.native(), &selector(INIT, &target.parameters));

        let mut decls = self.designated_decls(plan, target, &routine)?;
        for (idx, constructor) in constructors.iter().enumerate() {
            if idx != designated {
                decls.push(self.delegating_decl(plan, constructor, &routine)?);
            }
        }
        Ok(decls)
    }

    fn designated_decls(
        &self,
        plan: &ConstantPlan<'_>,
        constructor: &ConstructorModel,
        routine: &str,
    ) -> Result<Vec<Decl>, EmitError> {
        let native = self.native();
        let mut params = vec![format!("{native} *self")];
        params.extend(constructor.parameters.iter().map(|p| p.ty.declare(&p.name)));
        let body = Decl::block(
            constructor.line,
            format!("void {routine}({})", params.join(", ")),
            self.render_body(plan, &constructor.body)?,
        );

        let mut call_args = vec!["self".to_string()];
        call_args.extend(argument_list(&constructor.parameters));
        let wrapper = Decl::block(
            constructor.line,
            format!("- (instancetype){}", signature(INIT, &constructor.parameters)),
            vec![
                Stmt::synthetic(format!("{routine}({});", call_args.join(", "))),
                Stmt::synthetic("return self;"),
            ],
        )
        .bracketed(runtime::IGNORE_DESIGNATED_BEGIN, runtime::IGNORE_DESIGNATED_END);
        Ok(vec![body, wrapper])
    }

    fn delegating_decl(
        &self,
        plan: &ConstantPlan<'_>,
        constructor: &ConstructorModel,
        routine: &str,
    ) -> Result<Decl, EmitError> {
        let mut call_args = vec!["self".to_string()];
        if let Some(delegation) = &constructor.delegates_to {
            call_args.extend(delegation.arguments.iter().cloned());
        }
        let mut body = vec![Stmt::sourced(
            constructor.line,
            format!("{routine}({});", call_args.join(", ")),
        )];
        body.extend(self.render_body(plan, &constructor.body)?);
        body.push(Stmt::synthetic("return self;"));
        Ok(Decl::block(
            constructor.line,
            format!("- (instancetype){}", signature(INIT, &constructor.parameters)),
            body,
        ))
    }
}
