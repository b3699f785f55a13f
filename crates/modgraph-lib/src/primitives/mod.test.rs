// Tests for shared primitives

use super::*;

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(99), LogLevel::Trace);
}

#[test]
fn test_log_level_should_log() {
    assert!(LogLevel::Error.should_log(LogLevel::Error));
    assert!(LogLevel::Error.should_log(LogLevel::Trace));
    assert!(!LogLevel::Trace.should_log(LogLevel::Error));
    assert!(LogLevel::Info.should_log(LogLevel::Debug));
}

#[test]
fn test_log_level_fromstr_aliases() {
    assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
    assert_eq!("err".parse::<LogLevel>().unwrap(), LogLevel::Error);
    assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!("verbose".parse::<LogLevel>().unwrap(), LogLevel::Trace);
}

#[test]
fn test_log_format_fromstr() {
    assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
}

#[test]
fn test_invalid_config_value_reports_parse_error() {
    let err = "nope".parse::<LogFormat>().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_color_mode_fromstr() {
    assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
    assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Always);
    assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
}

#[test]
fn test_log_context_for_module() {
    let ctx = LogContext::for_module("resolve", "core");
    assert_eq!(ctx.operation, "resolve");
    assert_eq!(ctx.module.as_deref(), Some("core"));

    let bare = LogContext::new("order");
    assert!(bare.module.is_none());
}
