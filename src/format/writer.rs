//! Output writer with blank-line tracking
//!
//! Receives source one line at a time and applies the vertical whitespace rules of `gofmt`:
//! trailing whitespace dropped, at most one blank line in a row, no blank line directly after an
//! opening brace or before a closing one, and a single newline at the end of the file.

/// Writer that builds normalized output line by line
#[derive(Debug, Default)]
pub struct FormatWriter {
    /// The output buffer
    output: String,
    /// A blank line was seen and not yet written
    pending_blank: bool,
    /// The last written line opened a block
    after_open: bool,
}

impl FormatWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the formatted output
    pub fn finish(self) -> String {
        self.output
    }

    /// Write one source line (without its newline)
    pub fn writeln(&mut self, line: &str) {
        let line = line.trim_end();
        if line.is_empty() {
            if !self.output.is_empty() && !self.after_open {
                self.pending_blank = true;
            }
            return;
        }

        if self.pending_blank && !closes_block(line) {
            self.output.push('\n');
        }
        self.pending_blank = false;

        self.output.push_str(line);
        self.output.push('\n');
        self.after_open = line.ends_with('{') || line.ends_with('(');
    }
}

fn closes_block(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with('}') || line.starts_with(')')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_all(lines: &[&str]) -> String {
        let mut writer = FormatWriter::new();
        for line in lines {
            writer.writeln(line);
        }
        writer.finish()
    }

    #[test]
    fn test_new_writer_empty_output() {
        assert_eq!(FormatWriter::new().finish(), "");
    }

    #[test]
    fn test_trailing_whitespace_dropped() {
        assert_eq!(write_all(&["a  ", "\tb\t"]), "a\n\tb\n");
    }

    #[test]
    fn test_blank_runs_collapse() {
        assert_eq!(write_all(&["a", "", "", "", "b"]), "a\n\nb\n");
    }

    #[test]
    fn test_leading_and_trailing_blank_lines_dropped() {
        assert_eq!(write_all(&["", "a", "", ""]), "a\n");
    }

    #[test]
    fn test_no_blank_line_inside_braces_edges() {
        assert_eq!(write_all(&["f() {", "", "\tx", "", "}"]), "f() {\n\tx\n}\n");
        assert_eq!(write_all(&["import (", "", "\t\"fmt\"", "", ")"]), "import (\n\t\"fmt\"\n)\n");
    }

    #[test]
    fn test_blank_line_before_statement_kept() {
        assert_eq!(write_all(&["\t}", "", "\treturn nil", "}"]), "\t}\n\n\treturn nil\n}\n");
    }
}
