//! Configuration module for the kiosk.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use chrono::{FixedOffset, Local};

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the CMS, also used for asset URLs
    pub cms_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// How often the CMS is polled
    pub poll_interval: Duration,
    /// How often the clock advances
    pub tick_interval: Duration,
    /// Timeout for a single CMS request
    pub request_timeout: Duration,
    /// Timezone for the clock and offsetless CMS timestamps
    pub utc_offset: FixedOffset,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Values that were rejected and replaced by a default
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cms_url = lookup("KIOSK_CMS_URL").unwrap_or_else(|| "http://localhost:8055".to_string());

        let bind_addr = lookup("KIOSK_BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid KIOSK_BIND_ADDR format: {}", e)))?;

        let mut warnings = Vec::new();
        let poll_interval = millis(&lookup, "KIOSK_POLL_INTERVAL_MS", 5000, &mut warnings);
        let tick_interval = millis(&lookup, "KIOSK_TICK_INTERVAL_MS", 1000, &mut warnings);
        let request_timeout = millis(&lookup, "KIOSK_REQUEST_TIMEOUT_MS", 4000, &mut warnings);

        let utc_offset = match lookup("KIOSK_UTC_OFFSET") {
            Some(raw) => parse_utc_offset(&raw).unwrap_or_else(|| {
                warnings.push(format!("Invalid KIOSK_UTC_OFFSET {:?}, using local offset", raw));
                *Local::now().offset()
            }),
            None => *Local::now().offset(),
        };

        let log_level = lookup("KIOSK_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            cms_url,
            bind_addr,
            poll_interval,
            tick_interval,
            request_timeout,
            utc_offset,
            log_level,
            warnings,
        })
    }
}

/// Read a positive millisecond duration, falling back to `default_ms`.
///
/// Rejected values are recorded in `warnings`; logging is not set up yet
/// when configuration loads.
fn millis<F>(lookup: &F, key: &str, default_ms: u64, warnings: &mut Vec<String>) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Duration::from_millis(default_ms);
    };

    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Duration::from_millis(ms),
        _ => {
            warnings.push(format!("Invalid {} {:?}, using {}ms", key, raw, default_ms));
            Duration::from_millis(default_ms)
        }
    }
}

/// Parse `+HH:MM`, `-HH:MM`, `+HHMM` or `Z`.
pub fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
