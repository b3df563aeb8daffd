//! Go code emitter - builds Go source text
//!
//! A tab-indented line buffer with helpers for the few Go constructs the generator writes. Output
//! is laid out the way `gofmt` would, so the formatting pass only has whitespace to normalize.

/// A buffer for building Go source code with tab indentation
#[derive(Debug, Default)]
pub struct GoEmitter {
    buffer: String,
    indent_level: usize,
}

impl GoEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write a blank line
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write indentation only
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push('\t');
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

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Write a method: doc comment, receiver signature and body, followed by a blank line
    pub fn method<F>(&mut self, doc: &str, receiver: &str, signature: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.comment(doc);
        self.block(&format!("func ({}) {}", receiver, signature), f);
        self.blank_line();
    }

    /// Write a comment
    pub fn comment(&mut self, text: &str) {
        self.line(&format!("// {}", text));
    }

    /// Write an `import` declaration for `paths`: nothing, a single line, or a parenthesized block
    pub fn imports(&mut self, paths: &[&str]) {
        match paths {
            [] => return,
            [single] => self.line(&format!("import \"{}\"", single)),
            _ => {
                self.line("import (");
                self.indent();
                for path in paths {
                    self.line(&format!("\"{}\"", path));
                }
                self.dedent();
                self.line(")");
            }
        }
        self.blank_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_indents_with_tabs() {
        let mut e = GoEmitter::new();
        e.block("if !ok", |e| e.line("return nil"));
        assert_eq!(e.as_str(), "if !ok {\n\treturn nil\n}\n");
    }

    #[test]
    fn test_method_has_doc_and_trailing_blank_line() {
        let mut e = GoEmitter::new();
        e.method("Value implements driver.Valuer for E", "e E", "Value() (driver.Value, error)", |e| {
            e.line("return int(e), nil")
        });
        assert_eq!(
            e.finish(),
            "// Value implements driver.Valuer for E\nfunc (e E) Value() (driver.Value, error) {\n\treturn int(e), nil\n}\n\n"
        );
    }

    #[test]
    fn test_import_shapes() {
        let mut none = GoEmitter::new();
        none.imports(&[]);
        assert!(none.is_empty());

        let mut one = GoEmitter::new();
        one.imports(&["fmt"]);
        assert_eq!(one.as_str(), "import \"fmt\"\n\n");

        let mut many = GoEmitter::new();
        many.imports(&["database/sql/driver", "fmt"]);
        assert_eq!(many.as_str(), "import (\n\t\"database/sql/driver\"\n\t\"fmt\"\n)\n\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut e = GoEmitter::new();
        e.dedent();
        e.line("x");
        assert_eq!(e.as_str(), "x\n");
    }
}
