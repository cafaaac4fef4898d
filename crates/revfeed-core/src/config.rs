use crate::app_config::AppConfig;
use crate::ConfigError;

pub(crate) const DEFAULT_BASE_URL: &str = "https://www.heureka.cz/direct/dotaznik/";
pub(crate) const DEFAULT_USER_AGENT: &str = "revfeed/0.1 (review-export)";

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
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(None);
        };
        let secs = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(Some(secs))
    };

    let api_key = require("REVFEED_API_KEY")?;

    let base_url = or_default("REVFEED_BASE_URL", DEFAULT_BASE_URL);
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "REVFEED_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{base_url}'"),
        });
    }

    let request_timeout_secs = parse_optional_u64("REVFEED_REQUEST_TIMEOUT_SECS")?;
    let user_agent = or_default("REVFEED_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("REVFEED_LOG_LEVEL", "info");
    let order_reviews_path = PathBuf::from(or_default(
        "REVFEED_ORDER_REVIEWS_PATH",
        "data/heureka_reviews.json",
    ));
    let product_reviews_path = PathBuf::from(or_default(
        "REVFEED_PRODUCT_REVIEWS_PATH",
        "data/heureka_product_reviews.json",
    ));

    Ok(AppConfig {
        api_key,
        base_url,
        request_timeout_secs,
        user_agent,
        log_level,
        order_reviews_path,
        product_reviews_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
