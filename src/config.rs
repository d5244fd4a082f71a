use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub const DEFAULT_ACTIVITIES_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub activities_api_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            activities_api_url: try_load(
                &lookup,
                "ACTIVITIES_API_URL",
                DEFAULT_ACTIVITIES_API_URL.to_string(),
            ),
            host: try_load(&lookup, "HOST", DEFAULT_HOST.to_string()),
            port: try_load(&lookup, "PORT", DEFAULT_PORT),
        }
    }

    /// Host and port for the listener. The host may be a name (`localhost`)
    /// or an IPv6 literal with or without brackets; it is resolved at bind time.
    pub fn bind_endpoint(&self) -> (&str, u16) {
        (unbracket(&self.host), self.port)
    }

    /// Tried once when `bind_endpoint` is taken. None when the port has no successor.
    pub fn fallback_endpoint(&self) -> Option<(&str, u16)> {
        self.port
            .checked_add(1)
            .map(|port| (unbracket(&self.host), port))
    }
}

fn unbracket(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key).filter(|v| !v.trim().is_empty()) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}
