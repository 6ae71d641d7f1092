use recoup_core::errors::*;

#[test]
fn validation_error_managers_out_of_range_carries_bounds() {
    let err = ValidationError::ManagersOutOfRange {
        got: 12,
        min: 1,
        max: 10,
    };
    let msg = err.to_string();
    assert!(msg.contains("12"));
    assert!(msg.contains("10"));
}

#[test]
fn validation_error_malformed_key_carries_key() {
    let err = ValidationError::MalformedKey {
        key: "mgr1-exec2".into(),
    };
    assert!(err.to_string().contains("mgr1-exec2"));
}

#[test]
fn validation_error_converts_to_recoup_error() {
    let err: RecoupError = ValidationError::NegativeAmount {
        field: "manager_1_exec_1".into(),
        value: -5.0,
    }
    .into();
    assert!(matches!(err, RecoupError::Validation(_)));
    assert_eq!(err.error_code(), error_code::VALIDATION_ERROR);
    assert!(err.to_string().contains("manager_1_exec_1"));
}

#[test]
fn config_error_converts_to_recoup_error() {
    let err: RecoupError = ConfigError::InvalidValue {
        field: "team.num_managers".into(),
        message: "too many".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn io_error_converts_through_export_error() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err: RecoupError = ExportError::from(io).into();
    assert_eq!(err.error_code(), error_code::EXPORT_ERROR);
    assert!(err.to_string().contains("pipe closed"));
}

#[test]
fn coded_string_prefixes_error_code() {
    let err = RecoupError::UnknownProfile {
        name: "stellar".into(),
    };
    assert_eq!(err.coded_string(), "[UNKNOWN_PROFILE] unknown sample profile: stellar");
}
