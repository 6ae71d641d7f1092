use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use recoup_cli::{run, Cli, Command};
use recoup_report::ExportFormat;
use recoup_session::SampleProfile;

const LAKH_CONFIG: &str = r#"
[team]
num_managers = 1
exec_per_manager = 2

[incentive]
monthly_target = 4.0
min_incentive_limit = 1.0
unit_mode = "lakh"

[observability]
log_level = "warn"
"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut buf = Vec::new();
    run(cli, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

#[test]
fn parses_allocate_defaults() {
    let cli = Cli::try_parse_from(["recoup", "allocate", "--recoveries", "r.json"]).unwrap();
    match cli.command {
        Command::Allocate(args) => {
            assert_eq!(args.format, ExportFormat::Csv);
            assert!(args.config.is_none());
            assert!(args.out.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_sample_profile() {
    let cli = Cli::try_parse_from(["recoup", "sample", "--profile", "high", "--seed", "9"]).unwrap();
    match cli.command {
        Command::Sample(args) => {
            assert_eq!(args.profile, SampleProfile::High);
            assert_eq!(args.seed, 9);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rejects_unknown_profile_and_format() {
    assert!(Cli::try_parse_from(["recoup", "sample", "--profile", "stellar"]).is_err());
    assert!(
        Cli::try_parse_from(["recoup", "allocate", "--recoveries", "r.json", "--format", "xml"])
            .is_err()
    );
}

#[test]
fn allocate_writes_csv_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "recoup.toml", LAKH_CONFIG);
    let recoveries = write(
        dir.path(),
        "recoveries.json",
        r#"{"manager_1_exec_1": 2.0, "manager_1_exec_2": 3.0}"#,
    );

    let output = run_args(&[
        "recoup",
        "allocate",
        "--config",
        config.to_str().unwrap(),
        "--recoveries",
        recoveries.to_str().unwrap(),
    ])
    .unwrap();

    assert!(output.contains("Eligible,Yes"));
    assert!(output.contains("Total Pool,\"₹100,000\""));
    assert!(output.contains("Manager 1,Executive 2,300000,\"₹36,000\""));
}

#[test]
fn allocate_writes_json_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "recoup.toml", LAKH_CONFIG);
    let recoveries = write(
        dir.path(),
        "recoveries.json",
        r#"{"manager_1_exec_1": 0, "manager_1_exec_2": 0}"#,
    );
    let out = dir.path().join("report.json");

    let stdout = run_args(&[
        "recoup",
        "allocate",
        "--config",
        config.to_str().unwrap(),
        "--recoveries",
        recoveries.to_str().unwrap(),
        "--format",
        "json",
        "--out",
        out.to_str().unwrap(),
    ])
    .unwrap();
    assert!(stdout.is_empty());

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["result"]["eligible"], false);
    assert!(doc["result"]["reason"]
        .as_str()
        .unwrap()
        .contains("Minimum incentive limit not met"));
}

#[test]
fn allocate_reports_malformed_keys_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "recoup.toml", LAKH_CONFIG);
    let recoveries = write(dir.path(), "recoveries.json", r#"{"exec_1": 2.0}"#);

    let err = run_args(&[
        "recoup",
        "allocate",
        "--config",
        config.to_str().unwrap(),
        "--recoveries",
        recoveries.to_str().unwrap(),
    ])
    .unwrap_err();

    let chain = format!("{err:#}");
    assert!(chain.contains("invalid recoveries"));
    assert!(chain.contains("exec_1"));
}

#[test]
fn allocate_reports_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let recoveries = write(dir.path(), "recoveries.json", "{}");
    let missing = dir.path().join("missing.toml");

    let err = run_args(&[
        "recoup",
        "allocate",
        "--config",
        missing.to_str().unwrap(),
        "--recoveries",
        recoveries.to_str().unwrap(),
    ])
    .unwrap_err();
    assert!(format!("{err:#}").contains("failed to load config"));
}

#[test]
fn sample_covers_default_shape_and_is_deterministic() {
    let first = run_args(&["recoup", "sample", "--profile", "low", "--seed", "3"]).unwrap();
    let second = run_args(&["recoup", "sample", "--profile", "low", "--seed", "3"]).unwrap();
    assert_eq!(first, second);

    let figures: std::collections::BTreeMap<String, f64> = serde_json::from_str(&first).unwrap();
    // Default team: 3 managers of 5 executives.
    assert_eq!(figures.len(), 15);
    assert!(figures.contains_key("manager_3_exec_5"));
    assert!(figures.values().all(|v| (150_000.0..=450_000.0).contains(v)));
}

#[test]
fn sample_output_feeds_allocate() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(dir.path(), "recoup.toml", LAKH_CONFIG);
    let sample = run_args(&[
        "recoup",
        "sample",
        "--profile",
        "high",
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();
    let recoveries = write(dir.path(), "recoveries.json", &sample);

    let output = run_args(&[
        "recoup",
        "allocate",
        "--config",
        config.to_str().unwrap(),
        "--recoveries",
        recoveries.to_str().unwrap(),
    ])
    .unwrap();
    // High profile: at least 6 lakh per executive, far above the 1 lakh limit.
    assert!(output.contains("Eligible,Yes"));
}
