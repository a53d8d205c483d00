//! Process configuration from environment variables (a `.env` file is honored by the binary).
//!
//! | Var                     | Default   |
//! |-------------------------|-----------|
//! | `STORE_URL`             | required  |
//! | `STORE_API_KEY`         | unset     |
//! | `STORE_MAX_CONNECTIONS` | `5`       |
//! | `HOST`                  | `0.0.0.0` |
//! | `PORT`                  | `3000`    |
//! | `BODY_LIMIT_BYTES`      | `1048576` |

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Backend selected by the scheme of `STORE_URL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Rest,
    Memory,
}

impl StoreKind {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let scheme = url.split_once("://").map(|(s, _)| s.to_ascii_lowercase());
        match scheme.as_deref() {
            Some("postgres") | Some("postgresql") => Ok(StoreKind::Postgres),
            Some("http") | Some("https") => Ok(StoreKind::Rest),
            Some("memory") => Ok(StoreKind::Memory),
            _ => Err(ConfigError::UnsupportedStore(url.to_string())),
        }
    }
}

#[derive(Clone)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub url: String,
    pub api_key: Option<String>,
    pub max_connections: u32,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("kind", &self.kind)
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("STORE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("STORE_URL"))?;
        let kind = StoreKind::from_url(&url)?;
        let store = StoreConfig {
            kind,
            url,
            api_key: lookup("STORE_API_KEY").filter(|s| !s.is_empty()),
            max_connections: parse_or(&lookup, "STORE_MAX_CONNECTIONS", 5)?,
        };
        Ok(AppConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "PORT", 3000)?,
            body_limit_bytes: parse_or(&lookup, "BODY_LIMIT_BYTES", 1024 * 1024)?,
            store,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
