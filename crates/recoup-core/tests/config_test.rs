use recoup_core::config::*;
use recoup_core::models::UnitMode;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = RecoupConfig::from_toml("").unwrap();

    assert_eq!(config.team.num_managers, 3);
    assert_eq!(config.team.exec_per_manager, 5);

    assert_eq!(config.incentive.monthly_target, 5_000_000.0);
    assert_eq!(config.incentive.min_incentive_limit, 1_000_000.0);
    assert_eq!(config.incentive.unit_mode, UnitMode::Native);

    assert_eq!(config.export.currency_symbol, "₹");
    assert_eq!(config.export.recovery_style, RecoveryStyle::Raw);

    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[team]
num_managers = 2

[incentive]
monthly_target = 40.0
unit_mode = "lakh"

[export]
recovery_style = "currency"
"#;
    let config = RecoupConfig::from_toml(toml).unwrap();
    assert_eq!(config.team.num_managers, 2);
    // Non-overridden fields keep defaults
    assert_eq!(config.team.exec_per_manager, 5);
    assert_eq!(config.incentive.monthly_target, 40.0);
    assert_eq!(config.incentive.min_incentive_limit, 1_000_000.0);
    assert_eq!(config.incentive.unit_mode, UnitMode::Lakh);
    assert_eq!(config.export.recovery_style, RecoveryStyle::Currency);
}

#[test]
fn unit_mode_accepts_scaled_alias() {
    let config = RecoupConfig::from_toml("[incentive]\nunit_mode = \"scaled\"\n").unwrap();
    assert_eq!(config.incentive.unit_mode, UnitMode::Lakh);
}

#[test]
fn config_rejects_unknown_unit_mode() {
    let err = RecoupConfig::from_toml("[incentive]\nunit_mode = \"crore\"\n").unwrap_err();
    assert!(matches!(err, recoup_core::errors::ConfigError::ParseError { .. }));
}

#[test]
fn validate_rejects_team_shape_out_of_bounds() {
    let mut config = RecoupConfig::default();
    config.team.num_managers = 11;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("team.num_managers"));

    let mut config = RecoupConfig::default();
    config.team.exec_per_manager = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("team.exec_per_manager"));
}

#[test]
fn validate_rejects_negative_target() {
    let mut config = RecoupConfig::default();
    config.incentive.monthly_target = -1.0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("incentive.monthly_target"));
}

#[test]
fn load_reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recoup.toml");
    std::fs::write(&path, "[team]\nnum_managers = 4\nexec_per_manager = 10\n").unwrap();

    let config = RecoupConfig::load(&path).unwrap();
    assert_eq!(config.team.shape().num_managers, 4);
    assert_eq!(config.team.shape().exec_per_manager, 10);
}

#[test]
fn load_missing_file_reports_path() {
    let err = RecoupConfig::load("/nonexistent/recoup.toml").unwrap_err();
    assert!(matches!(err, recoup_core::errors::ConfigError::FileNotFound { .. }));
    assert!(err.to_string().contains("/nonexistent/recoup.toml"));
}

#[test]
fn config_serde_roundtrip() {
    let config = RecoupConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = RecoupConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.team.num_managers, config.team.num_managers);
    assert_eq!(roundtripped.incentive.unit_mode, config.incentive.unit_mode);
    assert_eq!(roundtripped.export.currency_symbol, config.export.currency_symbol);
}
