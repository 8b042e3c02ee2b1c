use anyhow::{bail, Context, Result};

/// One year; anything longer is a misconfiguration, not a cache policy.
const MAX_DROPDOWN_CACHE_TTL_HOURS: i64 = 24 * 365;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_api_url: String,
    /// Shared dropdown cache. Falls back to an in-process cache when unset.
    pub redis_url: Option<String>,
    pub dropdown_cache_ttl_hours: i64,
    pub backend_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            backend_api_url: require_env("BACKEND_API_URL")?,
            redis_url: std::env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            dropdown_cache_ttl_hours: check_ttl_hours(parse_env(
                "DROPDOWN_CACHE_TTL_HOURS",
                24,
            )?)?,
            backend_timeout_secs: parse_env("BACKEND_TIMEOUT_SECS", 30)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn dropdown_cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.dropdown_cache_ttl_hours)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn check_ttl_hours(hours: i64) -> Result<i64> {
    if !(1..=MAX_DROPDOWN_CACHE_TTL_HOURS).contains(&hours) {
        bail!(
            "DROPDOWN_CACHE_TTL_HOURS must be between 1 and {}, got {hours}",
            MAX_DROPDOWN_CACHE_TTL_HOURS
        );
    }
    Ok(hours)
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
