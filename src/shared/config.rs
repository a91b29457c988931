// Runtime settings, read from the environment.
//
// The binary loads a `.env` file first (dotenvy), then calls `Settings::from_env`.
// Tests build settings through `Settings::from_lookup` with a fixed map.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::modules::sign_up::core::notification::DEFAULT_NOTIFICATION_TTL;

pub const BIND_ADDR: &str = "SIGN_UP_BIND_ADDR";
pub const API_BASE_URL: &str = "SIGN_UP_API_BASE_URL";
pub const REQUEST_TIMEOUT_MS: &str = "SIGN_UP_REQUEST_TIMEOUT_MS";
pub const NOTIFICATION_TTL_MS: &str = "SIGN_UP_NOTIFICATION_TTL_MS";
pub const MOCK_DELAY_MS: &str = "SIGN_UP_MOCK_DELAY_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub notification_ttl: Duration,
    pub mock_delay: Option<Duration>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or(&lookup, BIND_ADDR, SocketAddr::from(([0, 0, 0, 0], 8080)))?;
        let api_base_url = lookup(API_BASE_URL)
            .unwrap_or_else(|| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();
        let request_timeout = Duration::from_millis(parse_or(&lookup, REQUEST_TIMEOUT_MS, 10_000)?);
        let notification_ttl = match lookup(NOTIFICATION_TTL_MS) {
            Some(raw) => Duration::from_millis(parse(NOTIFICATION_TTL_MS, raw)?),
            None => DEFAULT_NOTIFICATION_TTL,
        };
        let mock_delay = lookup(MOCK_DELAY_MS)
            .map(|raw| parse(MOCK_DELAY_MS, raw).map(Duration::from_millis))
            .transpose()?;

        Ok(Self {
            bind_addr,
            api_base_url,
            request_timeout,
            notification_ttl,
            mock_delay,
        })
    }
}

fn parse<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    let parsed = raw.trim().parse::<T>();
    parsed.map_err(|_| ConfigError::Invalid { key, value: raw })
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => parse(key, raw),
        None => Ok(default),
    }
}
