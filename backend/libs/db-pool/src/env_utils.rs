//! Environment variable parsing helpers
//!
//! A missing variable falls back to the default; a present but unparsable one
//! is an error so misconfiguration is caught at startup.

use std::fmt::Display;
use std::str::FromStr;

/// Parse an environment variable, using `default` when it is unset
pub fn parse_env_or<T>(key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}

/// Parse a required environment variable
pub fn parse_env_required<T>(key: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = std::env::var(key).map_err(|_| format!("{} environment variable not set", key))?;
    raw.trim()
        .parse()
        .map_err(|e| format!("Failed to parse {}='{}': {}", key, raw, e))
}
