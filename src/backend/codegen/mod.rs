//! Go method generation
//!
//! [`Generator`] owns the output buffer for one run. Each [`Generator::generate`] call discovers
//! one enum type, builds a fresh [`TypeContext`] for it and appends its methods; nothing carries
//! over between types except the buffer and the imports used.
//! [`Generator::finish`] prepends the shared header.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use enumgen::backend::Generator;
//! use enumgen::config::GeneratorConfig;
//!
//! let mut generator = Generator::new(GeneratorConfig::new(), &package);
//! generator.generate("Color")?;
//! let source = generator.finish(&args);
//! ```

mod cases;
mod context;
mod marshal;
mod preamble;
mod storage;

pub use context::{Conversion, ImportSet, TypeContext};
pub use preamble::generated_marker;

use crate::analysis::{self, GenerateError, ReducePolicy, reduce};
use crate::backend::go_emitter::GoEmitter;
use crate::config::GeneratorConfig;
use crate::frontend::loader::Package;

/// Generates Go conversion methods for the enum types of one package.
#[derive(Debug)]
pub struct Generator<'p> {
    config: GeneratorConfig,
    package: &'p Package,
    emitter: GoEmitter,
    imports: ImportSet,
}

impl<'p> Generator<'p> {
    pub fn new(config: GeneratorConfig, package: &'p Package) -> Self {
        tracing::debug!(?config, package = %package.name, "generator configured");
        Self {
            config,
            package,
            emitter: GoEmitter::new(),
            imports: ImportSet::default(),
        }
    }

    /// Discover `type_name` and append its methods to the buffer.
    ///
    /// On error nothing is appended for this type.
    ///
    /// ## Errors
    /// Returns a [`GenerateError`] if the type has no constants, a constant cannot be resolved or
    /// has an unsupported representation, or the textual representation is requested but missing.
    #[tracing::instrument(skip(self), fields(package = %self.package.name))]
    pub fn generate(&mut self, type_name: &str) -> Result<(), GenerateError> {
        let scanned = analysis::collect(self.package, type_name)?;
        let policy = ReducePolicy {
            error_on_unknown: self.config.error_on_unknown,
            prefer_textual: self.config.prefer_textual,
            saw_placeholder_member: scanned.saw_placeholder_member,
        };
        let set = reduce(type_name, scanned.values, policy)?;

        let ctx = TypeContext::new(type_name, set, self.config.prefer_textual);
        tracing::debug!(
            kind = %ctx.set.kind,
            cases = ctx.set.values.len(),
            default = ?ctx.default_target(),
            multi_case = ctx.multi_case(),
            "emitting methods"
        );

        if self.config.methods.storage() {
            self.emit_storage(&ctx);
        }
        if self.config.methods.marshal() {
            self.emit_marshal(&ctx);
        }
        Ok(())
    }

    /// Imports needed by the methods generated so far.
    pub fn imports(&self) -> ImportSet {
        self.imports
    }

    /// Methods generated so far, without the header.
    pub fn body(&self) -> &str {
        self.emitter.as_str()
    }

    /// Header followed by every generated method. The text is not yet formatted.
    pub fn finish(self, args: &[String]) -> String {
        let mut source = self.preamble(args);
        source.push_str(self.emitter.as_str());
        if self.config.debug {
            tracing::debug!("unformatted code:\n{}", source);
        }
        source
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::MethodFamilies;
    use crate::frontend::loader::load_sources;
    use std::path::PathBuf;

    const COLORS: &str = r#"package colors

type Color string

const (
	ColorNone  Color = ""
	ColorRed   Color = "red"
	ColorGreen Color = "green"
)

type Level uint8

const (
	_ Level = iota
	LevelLow
	LevelHigh
)
"#;

    fn package() -> Package {
        load_sources(PathBuf::from("colors"), vec![(PathBuf::from("colors/colors.go"), COLORS.to_string())]).unwrap()
    }

    #[test]
    fn test_failed_type_appends_nothing() {
        let package = package();
        let mut generator = Generator::new(GeneratorConfig::new(), &package);
        let err = generator.generate("Missing").unwrap_err();
        assert!(matches!(err, GenerateError::Discovery { .. }));
        assert!(generator.body().is_empty());
        assert_eq!(generator.imports(), ImportSet::default());
    }

    #[test]
    fn test_imports_accumulate_across_types() {
        let package = package();
        let mut generator = Generator::new(GeneratorConfig::new(), &package);
        generator.generate("Color").unwrap();
        let imports = generator.imports();
        assert!(imports.driver && imports.fmt);
        assert!(!imports.strconv);

        generator.generate("Level").unwrap();
        let imports = generator.imports();
        assert!(imports.driver && imports.fmt && imports.strconv);
    }

    #[test]
    fn test_types_do_not_leak_state() {
        let package = package();
        let mut generator = Generator::new(GeneratorConfig::new(), &package);
        generator.generate("Level").unwrap();
        generator.generate("Color").unwrap();
        let body = generator.body();
        // Level has a placeholder member; Color still falls back to its zero value.
        assert!(body.contains("failed to scan Level value: unrecognized value `%v`"));
        assert!(body.contains("*c = ColorNone"));
    }

    #[test]
    fn test_marshal_only_string_enum_needs_no_imports() {
        let package = package();
        let config = GeneratorConfig::new().with_methods(MethodFamilies::MarshalOnly);
        let mut generator = Generator::new(config, &package);
        generator.generate("Color").unwrap();
        assert_eq!(generator.imports(), ImportSet::default());
        let source = generator.finish(&["--type".into(), "Color".into(), "--json".into()]);
        assert!(source.starts_with("// Code generated by \"enumgen --type Color --json\"; DO NOT EDIT.\n\npackage colors\n\n// UnmarshalJSON"));
    }
}
