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
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        parse_flag(&raw).ok_or_else(|| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected true/false/1/0, got \"{raw}\""),
        })
    };

    let log_level = or_default("TYRECMP_LOG_LEVEL", "info");

    let search_base_url = or_default("TYRECMP_SEARCH_BASE_URL", "http://localhost:8080");
    let request_timeout_secs = parse_u64("TYRECMP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TYRECMP_USER_AGENT", "tyrecmp/0.1 (offer-comparison)");

    let use_fixture = parse_bool("TYRECMP_USE_FIXTURE", "true")?;
    let fixture_delay_ms = parse_u64("TYRECMP_FIXTURE_DELAY_MS", "500")?;

    let export_dir = PathBuf::from(or_default("TYRECMP_EXPORT_DIR", "."));

    Ok(AppConfig {
        log_level,
        search_base_url,
        request_timeout_secs,
        user_agent,
        use_fixture,
        fixture_delay_ms,
        export_dir,
    })
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
