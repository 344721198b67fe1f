//! Implementation-unit writer: an indentation-aware text buffer for native source.

/// A buffer for building native source text with consistent indentation.
#[derive(Debug)]
pub struct UnitWriter {
    buffer: String,
    indent_level: usize,
    indent_str: &'static str,
}

impl Default for UnitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: "  ", // 2 spaces, as in the runtime's own sources
        }
    }

    /// Get the generated text
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write a preprocessor line; always at column 0 regardless of indentation.
    pub fn directive(&mut self, s: &str) {
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write a blank line
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent_str);
        }
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write an `#include "..."` line
    pub fn include(&mut self, header: &str) {
        self.directive(&format!("#include \"{}\"", header));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_follow_indentation() {
        let mut w = UnitWriter::new();
        w.line("+ (jint)VERSION {");
        w.indent();
        w.line("return Test_VERSION;");
        w.dedent();
        w.line("}");
        assert_eq!(w.finish(), "+ (jint)VERSION {\n  return Test_VERSION;\n}\n");
    }

    #[test]
    fn directives_ignore_indentation() {
        let mut w = UnitWriter::new();
        w.indent();
        w.directive("#line 4");
        w.line("x();");
        w.dedent();
        w.dedent();
        w.line("}");
        w.blank_line();
        w.include("Test.h");
        assert_eq!(w.finish(), "#line 4\n  x();\n}\n\n#include \"Test.h\"\n");
    }
}
