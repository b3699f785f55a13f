// Tests for logger configuration mapping

use super::*;

#[test]
fn test_env_filter_directive_per_level() {
    assert_eq!(env_filter_directive(LogLevel::Error), "modgraph=error,error");
    assert_eq!(env_filter_directive(LogLevel::Warning), "modgraph=warn,warn");
    assert_eq!(env_filter_directive(LogLevel::Info), "modgraph=info,info");
    assert_eq!(env_filter_directive(LogLevel::Debug), "modgraph=debug,debug");
    assert_eq!(env_filter_directive(LogLevel::Trace), "modgraph=trace,trace");
}

#[test]
fn test_directive_parses_as_env_filter() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        let directive = env_filter_directive(level);
        assert!(EnvFilter::try_new(&directive).is_ok(), "bad: {directive}");
    }
}

#[test]
fn test_ansi_forced_on_and_off() {
    for output in [LogOutput::Stderr, LogOutput::Stdout] {
        assert!(ansi_enabled(ColorMode::Always, output));
        assert!(!ansi_enabled(ColorMode::Never, output));
    }
}

#[test]
fn test_global_starts_uninitialized_or_set_once() {
    // Other tests never call init, so the global stays empty; guard against
    // accidental init side effects in library code paths.
    assert_eq!(Logger::is_initialized(), Logger::global().is_some());
}
