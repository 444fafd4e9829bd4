use std::env::temp_dir;
use std::fs;
use std::path::PathBuf;

use clap::Parser;

use buckling_cli::{run, Cli, Commands};
use buckling_core::calculations::{ColumnAnalysis, EndCondition, SafetyClass};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("buckling").chain(args.iter().copied())).unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    temp_dir().join(format!("buckling_cli_test_{}_{}.json", name, std::process::id()))
}

const STEEL_ARGS: &[&str] = &[
    "analyze",
    "--length",
    "3",
    "--modulus",
    "200",
    "--inertia",
    "9.6e6",
    "--area",
    "2850",
    "--yield-stress",
    "250",
    "--no-timestamp",
];

#[test]
fn analyze_steel_example_text_report() {
    let output = run(&parse(STEEL_ARGS)).unwrap();

    assert!(output.starts_with("Column Buckling Analysis Report\n"));
    assert!(!output.contains("Generated:"));
    assert!(output.contains("Pinned-Pinned (K = 1.0)"));
    assert!(output.contains("2.106×10⁶ N"));
    assert!(output.contains("0.338 - Unsafe (FoS < 0.8)"));
}

#[test]
fn analyze_json_output() {
    let mut args: Vec<&str> = STEEL_ARGS.to_vec();
    args.extend(["--json", "--end-condition", "fixed-free"]);
    let output = run(&parse(&args)).unwrap();

    let analysis: ColumnAnalysis = serde_json::from_str(&output).unwrap();
    assert_eq!(analysis.input.end_condition, EndCondition::FixedFree);
    assert_eq!(analysis.base.k_factor, 2.0);
    assert_eq!(analysis.result.effective_length_m, 6.0);
}

#[test]
fn analyze_flags_override_input_file() {
    let path = temp_path("override");
    fs::write(
        &path,
        r#"{
            "label": "Aluminum",
            "length": { "value": 2.5, "unit": "m" },
            "modulus": { "value": 69.0, "unit": "GPa" },
            "inertia": { "value": 130000.0, "unit": "mm4" },
            "area": { "value": 564.0, "unit": "mm2" },
            "yield_stress": { "value": 240.0, "unit": "MPa" },
            "end_condition": "fixed-pinned"
        }"#,
    )
    .unwrap();

    let cli = parse(&["analyze", "--input", path.to_str().unwrap(), "--length", "250", "--length-unit", "cm"]);
    let Commands::Analyze(args) = &cli.command else {
        panic!("expected analyze command");
    };
    let input = args.column_input().unwrap();
    assert_eq!(input.label, "Aluminum");
    assert_eq!(input.length.value, 250.0);
    assert_eq!(input.length.unit, "cm");
    assert_eq!(input.end_condition, EndCondition::FixedPinned);

    let json_args = ["analyze", "--input", path.to_str().unwrap(), "--json"];
    let analysis: ColumnAnalysis = serde_json::from_str(&run(&parse(&json_args)).unwrap()).unwrap();
    assert_eq!(analysis.result.safety, SafetyClass::VerySafe);

    let _ = fs::remove_file(&path);
}

#[test]
fn analyze_partial_input_file_completed_by_flags() {
    let path = temp_path("partial");
    fs::write(&path, r#"{ "label": "Partial", "length": { "value": 300.0, "unit": "cm" } }"#).unwrap();
    let path_str = path.to_str().unwrap().to_string();

    let err = run(&parse(&["analyze", "--input", path_str.as_str()])).unwrap_err();
    assert_eq!(err.error_code(), "MISSING_FIELD");
    assert!(err.is_user_input());

    let output = run(&parse(&[
        "analyze",
        "--input",
        path_str.as_str(),
        "--modulus",
        "200",
        "--inertia",
        "9.6e6",
        "--area",
        "2850",
        "--yield-stress",
        "250",
        "--json",
    ]))
    .unwrap();
    let analysis: ColumnAnalysis = serde_json::from_str(&output).unwrap();
    assert_eq!(analysis.input.label, "Partial");
    assert_eq!(analysis.input.length.unit, "cm");
    assert_eq!(analysis.input.modulus.unit, "GPa");
    assert_eq!(analysis.result.safety, SafetyClass::Unsafe);

    let _ = fs::remove_file(&path);
}

#[test]
fn analyze_unit_flag_alone_does_not_supply_value() {
    let err = run(&parse(&[
        "analyze",
        "--length",
        "3",
        "--modulus",
        "200",
        "--inertia",
        "9.6e6",
        "--area-unit",
        "cm2",
        "--yield-stress",
        "250",
    ]))
    .unwrap_err();
    assert_eq!(err.error_code(), "MISSING_FIELD");
}

#[test]
fn analyze_missing_value_is_reported() {
    let err = run(&parse(&["analyze", "--length", "3"])).unwrap_err();
    assert_eq!(err.error_code(), "MISSING_FIELD");
}

#[test]
fn analyze_rejects_non_positive_values() {
    let zero_area = run(&parse(&[
        "analyze",
        "--length",
        "3",
        "--modulus",
        "200",
        "--inertia",
        "9.6e6",
        "--area",
        "0",
        "--yield-stress",
        "250",
    ]))
    .unwrap_err();
    assert_eq!(zero_area.error_code(), "INVALID_INPUT");

    let negative_length = run(&parse(&[
        "analyze",
        "--length",
        "-3",
        "--modulus",
        "200",
        "--inertia",
        "9.6e6",
        "--area",
        "2850",
        "--yield-stress",
        "250",
    ]))
    .unwrap_err();
    assert_eq!(negative_length.error_code(), "INVALID_INPUT");
}

#[test]
fn analyze_unknown_unit() {
    let mut args: Vec<&str> = STEEL_ARGS.to_vec();
    args.extend(["--length-unit", "furlong"]);
    let err = run(&parse(&args)).unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_UNIT");
}

#[test]
fn analyze_saves_output_file() {
    let path = temp_path("saved");
    let mut args: Vec<&str> = STEEL_ARGS.to_vec();
    let path_str = path.to_str().unwrap().to_string();
    args.extend(["--output", path_str.as_str()]);
    run(&parse(&args)).unwrap();

    let saved: ColumnAnalysis = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.result.safety, SafetyClass::Unsafe);
    let _ = fs::remove_file(&path);
}

#[test]
fn convert_command() {
    let output = run(&parse(&["convert", "9.6e6", "inertia", "mm4"])).unwrap();
    assert_eq!(output, "9600000 mm4 = 9.600×10⁻⁶ m4");

    let err = run(&parse(&["convert", "5", "length", "furlong"])).unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_UNIT");

    let err = run(&parse(&["convert", "5", "force", "N"])).unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
}

#[test]
fn units_command_lists_every_category() {
    let output = run(&parse(&["units"])).unwrap();
    for name in ["length", "modulus", "inertia", "area", "stress"] {
        assert!(output.contains(name), "missing {name}");
    }
    assert!(output.contains("  mm4   x 1e-12\n"));
}
