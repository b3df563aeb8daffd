//! CLI module for enumgen
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Usage
//!
//! ```text
//! enumgen --type T1,T2 [--output FILE] [-e|--error-on-unknown] [--tags a,b]
//!         [--json | --sql] [--stringer] [--debug] [PATTERNS...]
//! ```
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::{GeneratorConfig, MethodFamilies};
use crate::version::ENUMGEN_VERSION;
use commands::GenerateRequest;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate sql.Scanner, driver.Valuer, json.Unmarshaler and json.Marshaler methods for Go enums
#[derive(Parser, Debug)]
#[command(name = "enumgen")]
#[command(version = ENUMGEN_VERSION)]
#[command(long_about = None)]
pub struct Cli {
    /// Comma-separated list of type names
    #[arg(long = "type", value_name = "TYPES", value_delimiter = ',', required = true)]
    pub types: Vec<String>,

    /// Output file name; default <dir>/<type>.gen.go
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Return an error when scanning or unmarshalling an unknown value
    ///
    /// Always on when the first constant of a type is `_` or no constant equals the zero value of
    /// the underlying type; otherwise unknown values map to the zero-value constant.
    #[arg(short = 'e', long = "error-on-unknown")]
    pub error_on_unknown: bool,

    /// Comma-separated list of build tags to apply (directories only)
    #[arg(long, value_name = "TAGS", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Generate only json.Marshaler and json.Unmarshaler methods
    #[arg(long, conflicts_with = "sql")]
    pub json: bool,

    /// Generate only sql.Scanner and driver.Valuer methods
    #[arg(long)]
    pub sql: bool,

    /// Use the String() method of the enum instead of the underlying integer value
    #[arg(long)]
    pub stringer: bool,

    /// Log the unformatted output and per-type decisions
    #[arg(long)]
    pub debug: bool,

    /// Package directory, or a list of Go files
    #[arg(value_name = "PATTERNS", default_value = ".")]
    pub patterns: Vec<PathBuf>,
}

impl Cli {
    /// Immutable generator configuration for this run.
    pub fn config(&self) -> GeneratorConfig {
        let methods = if self.json {
            MethodFamilies::MarshalOnly
        } else if self.sql {
            MethodFamilies::StorageOnly
        } else {
            MethodFamilies::Both
        };
        GeneratorConfig::new()
            .with_methods(methods)
            .with_error_on_unknown(self.error_on_unknown)
            .with_prefer_textual(self.stringer)
            .with_debug(self.debug)
    }

    /// Build tags, ignoring empty entries from `--tags ""` or trailing commas.
    fn tags(&self) -> Vec<String> {
        self.tags.iter().filter(|t| !t.is_empty()).cloned().collect()
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();
    let args: Vec<String> = env::args().skip(1).collect();

    match execute(cli, args) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
///
/// `args` are the raw command-line arguments (without the program name), recorded verbatim in the
/// provenance line of the generated file.
pub fn execute(cli: Cli, args: Vec<String>) -> CliResult<ExitCode> {
    let request = request(&cli, args)?;
    commands::generate(&request)
}

fn request(cli: &Cli, args: Vec<String>) -> CliResult<GenerateRequest> {
    if cli.types.iter().any(|t| t.trim().is_empty()) {
        return Err(CliError::failure("Error: no types specified"));
    }
    let tags = cli.tags();
    let source = commands::resolve_source(&cli.patterns, &tags)?;
    Ok(GenerateRequest {
        types: cli.types.clone(),
        source,
        tags,
        output: cli.output.clone(),
        config: cli.config(),
        args,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_types() {
        let cli = Cli::try_parse_from(["enumgen", "--type", "A,B"]).unwrap();
        assert_eq!(cli.types, vec!["A", "B"]);
        assert_eq!(cli.patterns, vec![PathBuf::from(".")]);
        assert_eq!(cli.config(), GeneratorConfig::new());
    }

    #[test]
    fn test_cli_type_required() {
        assert!(Cli::try_parse_from(["enumgen", "."]).is_err());
    }

    #[test]
    fn test_cli_json_and_sql_conflict() {
        assert!(Cli::try_parse_from(["enumgen", "--type", "A", "--json", "--sql"]).is_err());
    }

    #[test]
    fn test_cli_flags_compose() {
        let cli = Cli::try_parse_from(["enumgen", "--type", "A", "--sql", "-e", "--stringer"]).unwrap();
        let config = cli.config();
        assert_eq!(config.methods, MethodFamilies::StorageOnly);
        assert!(config.error_on_unknown);
        assert!(config.prefer_textual);

        let cli = Cli::try_parse_from(["enumgen", "--type", "A", "--json", "--error-on-unknown"]).unwrap();
        let config = cli.config();
        assert_eq!(config.methods, MethodFamilies::MarshalOnly);
        assert!(config.error_on_unknown);
    }

    #[test]
    fn test_cli_tags_and_patterns() {
        let cli = Cli::try_parse_from(["enumgen", "--type", "A", "--tags", "linux,,prod", "a.go", "b.go"]).unwrap();
        assert_eq!(cli.tags(), vec!["linux", "prod"]);
        assert_eq!(cli.patterns.len(), 2);
        let err = request(&cli, Vec::new()).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_empty_type_name_rejected() {
        let cli = Cli::try_parse_from(["enumgen", "--type", "A,"]).unwrap();
        let err = request(&cli, Vec::new()).unwrap_err();
        assert!(err.message.contains("no types specified"));
    }
}
