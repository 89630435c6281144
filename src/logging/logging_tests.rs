use super::*;

#[test]
fn test_log_config_default_logs_to_stderr_only() {
    let config = LogConfig::default();
    assert_eq!(config.log_level, Level::INFO);
    assert!(!config.json_format);
    assert!(config.log_dir.is_none());
}

#[test]
fn test_default_log_dir_is_under_hub() {
    let dir = default_log_dir();
    assert!(dir.ends_with("logs"));
    assert!(dir.to_string_lossy().contains(".hub"));
}

#[test]
fn test_parse_rotation_hourly() {
    let debug = format!("{:?}", parse_rotation("HOURLY"));
    assert_eq!(debug, format!("{:?}", Rotation::HOURLY));
}

#[test]
fn test_parse_rotation_never() {
    let debug = format!("{:?}", parse_rotation("never"));
    assert_eq!(debug, format!("{:?}", Rotation::NEVER));
}

#[test]
fn test_parse_rotation_unknown_defaults_to_daily() {
    // Rotation doesn't impl PartialEq, so compare debug output
    let debug = format!("{:?}", parse_rotation("weekly"));
    assert_eq!(debug, format!("{:?}", Rotation::DAILY));
}

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("debug"), Level::DEBUG);
    assert_eq!(parse_level(" WARN "), Level::WARN);
    assert_eq!(parse_level("chatty"), Level::INFO);
}

#[test]
fn test_log_filename_constant() {
    assert_eq!(LOG_FILENAME, "hub-entities.log");
}
