//! Generated-file header: provenance line, package clause and imports

use super::Generator;
use crate::backend::go_emitter::GoEmitter;

/// Provenance line naming the invocation that produced the file.
pub fn generated_marker(args: &[String]) -> String {
    let mut invocation = String::from("enumgen");
    for arg in args {
        invocation.push(' ');
        invocation.push_str(arg);
    }
    format!("Code generated by \"{}\"; DO NOT EDIT.", invocation)
}

impl Generator<'_> {
    /// Header for everything generated so far.
    ///
    /// Imports reflect the method bodies actually emitted, across all types.
    pub(crate) fn preamble(&self, args: &[String]) -> String {
        let mut e = GoEmitter::new();
        e.comment(&generated_marker(args));
        e.blank_line();
        e.line(&format!("package {}", self.package.name));
        e.blank_line();
        e.imports(&self.imports.paths());
        e.finish()
    }
}
