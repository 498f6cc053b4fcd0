use asm_inspect::cli::{FeaturesCli, McaCli};
use asm_inspect::{AsmSyntax, OutputFormat};
use clap::Parser;

#[test]
fn test_mca_defaults() {
    let cli = McaCli::try_parse_from(["run-llvm-mca", "a.out"]).unwrap();

    assert_eq!(cli.syntax, AsmSyntax::Intel);
    assert!(cli.symbols().is_empty());
    assert!(!cli.all_stats && !cli.all_views);
    assert_eq!(cli.analyze_request().to_args(), vec!["-output-asm-variant=1"]);
}

#[test]
fn test_mca_att_all_stats() {
    let cli = McaCli::try_parse_from([
        "run-llvm-mca",
        "a.out",
        "--syntax",
        "at&t",
        "--all-stats",
        "-s",
        "main, helper",
    ])
    .unwrap();

    assert_eq!(cli.symbols(), vec!["main", "helper"]);
    assert_eq!(
        cli.analyze_request().to_args(),
        vec!["-output-asm-variant=0", "-all-stats"]
    );
}

#[test]
fn test_mca_rejects_unknown_syntax() {
    let err = McaCli::try_parse_from(["run-llvm-mca", "a.out", "--syntax", "gas"]).unwrap_err();
    assert!(err.to_string().contains("gas"));
}

#[test]
fn test_mca_tool_override() {
    let cli = McaCli::try_parse_from([
        "run-llvm-mca",
        "a.out",
        "--objdump",
        "llvm-objdump-18",
        "--mca",
        "llvm-mca-18",
    ])
    .unwrap();

    let tools = cli.toolchain();
    assert_eq!(tools.objdump, "llvm-objdump-18");
    assert_eq!(tools.mca, "llvm-mca-18");
}

#[test]
fn test_features_requires_symbol() {
    assert!(FeaturesCli::try_parse_from(["view-cpu-features", "Cargo.toml"]).is_err());
}

#[test]
fn test_features_rejects_missing_file() {
    let err = FeaturesCli::try_parse_from(["view-cpu-features", "does-not-exist.o", "-s", "main"])
        .unwrap_err();
    assert!(err.to_string().contains("is not a valid path to the file"));
}

#[test]
fn test_features_args() {
    let cli = FeaturesCli::try_parse_from([
        "view-cpu-features",
        "Cargo.toml",
        "--symbol",
        "strlen_avx2",
        "--cpu",
        "Skylake",
        "--format",
        "list",
        "-vv",
    ])
    .unwrap();

    assert_eq!(cli.symbol, "strlen_avx2");
    assert_eq!(cli.cpu.as_deref(), Some("Skylake"));
    assert_eq!(cli.format, OutputFormat::List);
    assert_eq!(cli.verbose, 2);
}
