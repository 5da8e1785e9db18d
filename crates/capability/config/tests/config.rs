use campus_config::{AppConfig, ConfigError};
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::set_var("CAMPUS_JWT_SECRET", "secret");
        std::env::set_var("CAMPUS_JWT_ACCESS_TTL_SECONDS", "1800");
        std::env::set_var("CAMPUS_HTTP_ADDR", "127.0.0.1:8081");
    }

    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8081");
    assert_eq!(config.jwt_secret, "secret");
    assert_eq!(config.jwt_access_ttl_seconds, 1800);
}

#[test]
fn defaults_apply_when_unset() {
    let config = AppConfig::from_lookup(lookup(&[("CAMPUS_JWT_SECRET", "s")])).expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8080");
    assert_eq!(config.jwt_access_ttl_seconds, 3600);
    assert_eq!(config.jwt_refresh_ttl_seconds, 604_800);
    assert_eq!(config.mock_latency_ms, 300);
    assert!(config.seed_fixtures);
    assert_eq!(config.default_page_size, 10);
    assert_eq!(config.max_page_size, 100);
    assert_eq!(config.page_window, 5);
}

#[test]
fn secret_is_required() {
    let err = AppConfig::from_lookup(lookup(&[])).expect_err("missing");
    assert!(matches!(err, ConfigError::Missing(key) if key == "CAMPUS_JWT_SECRET"));
}

#[test]
fn zero_page_size_is_invalid() {
    let err = AppConfig::from_lookup(lookup(&[
        ("CAMPUS_JWT_SECRET", "s"),
        ("CAMPUS_DEFAULT_PAGE_SIZE", "0"),
    ]))
    .expect_err("invalid");
    assert!(matches!(err, ConfigError::Invalid(key, _) if key == "CAMPUS_DEFAULT_PAGE_SIZE"));
}

#[test]
fn malformed_number_is_invalid() {
    let err = AppConfig::from_lookup(lookup(&[
        ("CAMPUS_JWT_SECRET", "s"),
        ("CAMPUS_MOCK_LATENCY_MS", "fast"),
    ]))
    .expect_err("invalid");
    assert_eq!(
        err.to_string(),
        "invalid value for CAMPUS_MOCK_LATENCY_MS: fast"
    );
}

#[test]
fn fixtures_and_latency_can_be_disabled() {
    let config = AppConfig::from_lookup(lookup(&[
        ("CAMPUS_JWT_SECRET", "s"),
        ("CAMPUS_SEED_FIXTURES", "false"),
        ("CAMPUS_MOCK_LATENCY_MS", "0"),
    ]))
    .expect("config");
    assert!(!config.seed_fixtures);
    assert_eq!(config.mock_latency_ms, 0);
}
