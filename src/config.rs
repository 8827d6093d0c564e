use std::{env, fmt::Display, fs::read_to_string, str::FromStr, time::Duration};

use tracing::{info, warn};

use crate::error::AppError;

pub struct Config {
    pub port: u16,
    /// Upstream document-generation endpoint. Optional on purpose: absence is
    /// a per-request error, not a startup failure.
    pub api_url: Option<String>,
    /// Secret forwarded to the upstream in the `x-api-key` header.
    pub api_key: Option<String>,
    /// Origin header attached to outbound calls when set.
    pub origin: Option<String>,
    pub faculty_path: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "8080"),
            api_url: try_secret("TITLEPAGE_API_URL"),
            api_key: try_secret("TITLEPAGE_API_KEY"),
            origin: env::var("TITLEPAGE_ORIGIN").ok(),
            faculty_path: try_load("FACULTY_DATA", "faculty.jsonl"),
            upstream_timeout: Duration::from_secs(try_load("UPSTREAM_TIMEOUT_SECS", "30")),
        }
    }

    /// Configuration guard for the proxy route: both upstream values must be
    /// present before any outbound call is attempted.
    pub fn upstream(&self) -> Result<(&str, &str), AppError> {
        match (&self.api_url, &self.api_key) {
            (Some(url), Some(key)) => Ok((url.as_str(), key.as_str())),
            _ => Err(AppError::ConfigMissing),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

/// Looks up a secret in the environment first, then as a mounted secret file.
/// Absence is tolerated; the proxy route rejects requests until both upstream
/// secrets are present.
fn try_secret(secret_name: &str) -> Option<String> {
    if let Ok(value) = env::var(secret_name) {
        return Some(value.trim().to_string());
    }

    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
        })
        .ok()
}
