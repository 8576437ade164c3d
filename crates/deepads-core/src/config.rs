use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default base for generated short links.
pub const DEFAULT_SHORT_LINK_BASE: &str = "https://deepads.io";

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
/// Every variable has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("DEEPADS_ENV", "development"))?;
    let log_level = or_default("DEEPADS_LOG_LEVEL", "info");
    let short_link_base =
        parse_link_base(&or_default("DEEPADS_SHORT_LINK_BASE", DEFAULT_SHORT_LINK_BASE))?;
    let brief_path = PathBuf::from(or_default("DEEPADS_BRIEF_PATH", "./config/brief.yaml"));
    let keyword_display_limit = parse_usize("DEEPADS_KEYWORD_DISPLAY_LIMIT", "10")?;
    let signal_display_limit = parse_usize("DEEPADS_SIGNAL_DISPLAY_LIMIT", "6")?;

    Ok(AppConfig {
        env,
        log_level,
        short_link_base,
        brief_path,
        keyword_display_limit,
        signal_display_limit,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DEEPADS_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Validates the short-link base and strips any trailing slash.
fn parse_link_base(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed
        .split_once("://")
        .is_some_and(|(_, rest)| !rest.is_empty());
    if !has_scheme || !has_host {
        return Err(ConfigError::InvalidEnvVar {
            var: "DEEPADS_SHORT_LINK_BASE".to_string(),
            reason: format!("expected an http(s) URL, got '{raw}'"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
