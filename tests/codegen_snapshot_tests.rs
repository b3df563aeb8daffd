//! Golden snapshot tests for codegen
//!
//! These tests load the Go packages under `tests/fixtures/`, generate the conversion methods and
//! compare the formatted output against stored snapshots. This ensures codegen changes are
//! reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use std::path::PathBuf;

use enumgen::backend::Generator;
use enumgen::config::{GeneratorConfig, MethodFamilies};
use enumgen::format::format_source;
use enumgen::frontend::loader::{PackageSource, load_package};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Generate formatted Go code for `types` in a fixture package
fn generate_go(name: &str, types: &[&str], tags: &[&str], config: GeneratorConfig, args: &[&str]) -> String {
    let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    let package = load_package(&PackageSource::Directory(fixture(name)), &tags).expect("fixture failed to load");
    let mut generator = Generator::new(config, &package);
    for type_name in types {
        generator.generate(type_name).expect("generation failed");
    }
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    format_source(&generator.finish(&args)).expect("generated code failed to format")
}

#[test]
fn test_string_enum_codegen() {
    let go = generate_go("string", &["MyEnum"], &[], GeneratorConfig::new(), &["--type", "MyEnum"]);
    insta::assert_snapshot!("string_enum", go);
}

#[test]
fn test_unsigned_enum_codegen() {
    let go = generate_go(
        "integer",
        &["MyUnsignedEnum"],
        &[],
        GeneratorConfig::new(),
        &["--type", "MyUnsignedEnum"],
    );
    insta::assert_snapshot!("unsigned_enum", go);
}

#[test]
fn test_signed_enum_storage_only_codegen() {
    let config = GeneratorConfig::new()
        .with_methods(MethodFamilies::StorageOnly)
        .with_error_on_unknown(true);
    let go = generate_go(
        "integer",
        &["MySignedEnum"],
        &[],
        config,
        &["--type", "MySignedEnum", "--sql", "-e"],
    );
    insta::assert_snapshot!("signed_enum_storage_only", go);
}

#[test]
fn test_stringer_enum_codegen() {
    let config = GeneratorConfig::new().with_prefer_textual(true);
    let go = generate_go("stringer", &["MyEnum"], &[], config, &["--type", "MyEnum", "--stringer"]);
    insta::assert_snapshot!("stringer_enum", go);
}

#[test]
fn test_placeholder_enum_codegen() {
    let go = generate_go("placeholder", &["Status"], &[], GeneratorConfig::new(), &["--type", "Status"]);
    insta::assert_snapshot!("placeholder_enum", go);
}

#[test]
fn test_build_tags_codegen() {
    let config = GeneratorConfig::new().with_methods(MethodFamilies::MarshalOnly);
    let go = generate_go("tagged", &["Kind"], &["extra"], config, &["--type", "Kind", "--json", "--tags", "extra"]);
    insta::assert_snapshot!("tagged_enum_marshal_only", go);
}
