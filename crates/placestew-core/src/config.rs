use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment is valid.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("PLACESTEW_LOG_LEVEL", "warn");
    let maps_base_url = or_default("PLACESTEW_MAPS_BASE_URL", "https://www.google.com/maps");
    if !maps_base_url.starts_with("http") {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACESTEW_MAPS_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got \"{maps_base_url}\""),
        });
    }

    let search_timeout_ms = parse_u64("PLACESTEW_SEARCH_TIMEOUT_MS", "10000")?;
    let search_poll_interval_ms = parse_u64("PLACESTEW_SEARCH_POLL_INTERVAL_MS", "250")?;
    if search_poll_interval_ms == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACESTEW_SEARCH_POLL_INTERVAL_MS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let search_max_retries = parse_u32("PLACESTEW_SEARCH_MAX_RETRIES", "2")?;
    let search_retry_delay_ms = parse_u64("PLACESTEW_SEARCH_RETRY_DELAY_MS", "1000")?;

    Ok(AppConfig {
        log_level,
        maps_base_url,
        search_timeout_ms,
        search_poll_interval_ms,
        search_max_retries,
        search_retry_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
