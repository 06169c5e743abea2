use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("GOOGLE_PLACES_API_KEY", "test-key");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_PLACES_API_KEY"),
        "expected MissingEnvVar(GOOGLE_PLACES_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("GOOGLE_PLACES_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should load");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.google_places_api_key, "test-key");
    assert_eq!(cfg.places_base_url, "https://maps.googleapis.com/maps/api/");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "nearbite/0.1 (places-proxy)");
    assert_eq!(cfg.page_token_delay_ms, 2_000);
    assert_eq!(cfg.price_bound, PriceBound::Exact);
    assert_eq!(cfg.photo_max_width, 400);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("NEARBITE_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEARBITE_BIND_ADDR"),
        "expected InvalidEnvVar(NEARBITE_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn page_token_delay_below_provider_minimum_is_rejected() {
    let mut map = full_env();
    map.insert("NEARBITE_PAGE_TOKEN_DELAY_MS", "500");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEARBITE_PAGE_TOKEN_DELAY_MS"),
        "expected InvalidEnvVar(NEARBITE_PAGE_TOKEN_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn page_token_delay_override() {
    let mut map = full_env();
    map.insert("NEARBITE_PAGE_TOKEN_DELAY_MS", "2500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.page_token_delay_ms, 2_500);
}

#[test]
fn price_bound_accepts_min() {
    let mut map = full_env();
    map.insert("NEARBITE_PRICE_BOUND", "min");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.price_bound, PriceBound::Minimum);
}

#[test]
fn price_bound_rejects_unknown_value() {
    let mut map = full_env();
    map.insert("NEARBITE_PRICE_BOUND", "max");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEARBITE_PRICE_BOUND"),
        "expected InvalidEnvVar(NEARBITE_PRICE_BOUND), got: {result:?}"
    );
}

#[test]
fn request_timeout_invalid() {
    let mut map = full_env();
    map.insert("NEARBITE_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEARBITE_REQUEST_TIMEOUT_SECS"
    ));
}

#[test]
fn photo_max_width_zero_is_rejected() {
    let mut map = full_env();
    map.insert("NEARBITE_PHOTO_MAX_WIDTH", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEARBITE_PHOTO_MAX_WIDTH"
    ));
}

#[test]
fn debug_output_redacts_api_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-key"), "api key leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
