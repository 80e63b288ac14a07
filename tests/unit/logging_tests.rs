// Logging module unit tests

use watermark_manager::config::LoggingConfig;
use watermark_manager::logging::{build_filter, init_subscriber};

#[test]
fn test_default_level_is_warn() {
    let config = LoggingConfig::default();
    let filter = build_filter(&config.level, None).unwrap();
    assert_eq!(filter.to_string(), "warn");
}

#[test]
fn test_rust_log_value_wins() {
    let filter = build_filter("warn", Some("trace")).unwrap();
    assert_eq!(filter.to_string(), "trace");
}

#[test]
fn test_second_init_fails() {
    // Only one global subscriber can be installed per process
    let _ = init_subscriber(&LoggingConfig::default());
    assert!(init_subscriber(&LoggingConfig::default()).is_err());
}
