use crate::app_config::{AppConfig, Environment, PriceBound};
use crate::ConfigError;

/// Shortest wait the provider accepts before a continuation token becomes valid.
pub const MIN_PAGE_TOKEN_DELAY_MS: u64 = 2_000;

const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let google_places_api_key = require("GOOGLE_PLACES_API_KEY")?;

    let env = parse_environment(&or_default("NEARBITE_ENV", "development"));
    let bind_addr = parse_addr("NEARBITE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("NEARBITE_LOG_LEVEL", "info");
    let places_base_url = or_default("NEARBITE_PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL);
    let request_timeout_secs = parse_u64("NEARBITE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("NEARBITE_USER_AGENT", "nearbite/0.1 (places-proxy)");

    let page_token_delay_ms = parse_u64("NEARBITE_PAGE_TOKEN_DELAY_MS", "2000")?;
    if page_token_delay_ms < MIN_PAGE_TOKEN_DELAY_MS {
        return Err(invalid(
            "NEARBITE_PAGE_TOKEN_DELAY_MS",
            format!("must be at least {MIN_PAGE_TOKEN_DELAY_MS} ms"),
        ));
    }

    let price_bound = parse_price_bound(&or_default("NEARBITE_PRICE_BOUND", "exact"))?;

    let photo_max_width = parse_u32("NEARBITE_PHOTO_MAX_WIDTH", "400")?;
    if photo_max_width == 0 {
        return Err(invalid(
            "NEARBITE_PHOTO_MAX_WIDTH",
            "must be greater than zero".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        google_places_api_key,
        places_base_url,
        request_timeout_secs,
        user_agent,
        page_token_delay_ms,
        price_bound,
        photo_max_width,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_price_bound(s: &str) -> Result<PriceBound, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "exact" => Ok(PriceBound::Exact),
        "min" | "minimum" => Ok(PriceBound::Minimum),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NEARBITE_PRICE_BOUND".to_string(),
            reason: format!("expected \"exact\" or \"min\", got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
