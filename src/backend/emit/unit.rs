//! Assemble the sections of one implementation unit into text.

use objgen_core::lang::runtime;

use crate::backend::writer::UnitWriter;

use super::{Decl, EmitError, LineMapper, Section, UnitEmitter};

impl<'a> UnitEmitter<'a> {
    /// Render the complete implementation unit.
    ///
    /// Every section is computed before any text is written, so a failure in a late section never leaves a partial
    /// unit behind.
    #[tracing::instrument(skip_all, fields(type_name = %self.ty.name))]
    pub fn render(&self) -> Result<String, EmitError> {
        self.validate_enum_constants()?;
        let plan = self.constant_plan()?;

        let mut sections: Vec<(Section, Vec<Decl>)> = Vec::with_capacity(Section::ORDER.len());
        for section in Section::ORDER {
            let decls = match section {
                Section::Constants => {
                    let mut decls = self.emit_constants(&plan);
                    decls.extend(self.emit_static_storage(&plan));
                    decls
                }
                Section::StaticAccessors => self.emit_static_accessors(),
                Section::EnumAccessors => self.emit_enum_accessors(),
                Section::AnnotationAccessors => self.emit_annotation_accessors()?,
                Section::PropertyBindings => self.emit_property_bindings(),
                Section::Constructors => self.emit_constructors(&plan)?,
                Section::Methods => self.emit_methods(&plan)?,
            };
            sections.push((section, decls));
        }

        let mut w = UnitWriter::new();
        let mut lines = LineMapper::new(self.config.emit_line_directives);
        w.include(runtime::SOURCE_HEADER);
        w.include(&format!("{}.h", self.native()));
        w.blank_line();

        let (file_scope, members): (Vec<_>, Vec<_>) = sections.iter().partition(|(s, _)| s.is_file_scope());
        let file_scope: Vec<&Decl> = file_scope.iter().flat_map(|(_, decls)| decls).collect();
        for decl in &file_scope {
            lines.write_decl(&mut w, decl);
        }
        if !file_scope.is_empty() {
            w.blank_line();
        }

        w.line(&format!("@implementation {}", self.native()));
        w.blank_line();
        for decl in members.iter().flat_map(|(_, decls)| decls) {
            lines.write_decl(&mut w, decl);
            w.blank_line();
        }
        w.line("@end");
        Ok(w.finish())
    }
}
