//! Edge configuration.
//!
//! Every variable is optional; blank values fall back to the default.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::EdgeConfigError;
use crate::telemetry::{DEFAULT_LOG_LEVEL, LogFormat};

/// Listen address variable.
pub const BIND_ADDR_ENV: &str = "CIFDESK_BIND_ADDR";
/// Built UI bundle directory variable.
pub const DIST_DIR_ENV: &str = "CIFDESK_DIST_DIR";
/// Log level variable.
pub const LOG_LEVEL_ENV: &str = "CIFDESK_LOG";
/// Log format variable.
pub const LOG_FORMAT_ENV: &str = "CIFDESK_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DIST_DIR: &str = "crates/cifdesk-ui/dist";

/// Runtime settings for the edge host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeConfig {
    /// Socket to listen on.
    pub bind_addr: SocketAddr,
    /// Directory holding `index.html` and the wasm bundle.
    pub dist_dir: PathBuf,
    /// Default filter directive.
    pub log_level: String,
    /// Subscriber output format.
    pub log_format: LogFormat,
}

impl EdgeConfig {
    /// Read the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeConfigError`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, EdgeConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeConfigError`] when a set variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EdgeConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_raw = read(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|source| EdgeConfigError::InvalidBindAddr {
                value: bind_raw.clone(),
                source,
            })?;
        let log_format = match read(LOG_FORMAT_ENV) {
            Some(value) => {
                LogFormat::parse(&value).ok_or(EdgeConfigError::InvalidLogFormat { value })?
            }
            None => LogFormat::infer(),
        };

        Ok(Self {
            bind_addr,
            dist_dir: PathBuf::from(read(DIST_DIR_ENV).unwrap_or_else(|| DEFAULT_DIST_DIR.to_string())),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config = EdgeConfig::from_lookup(lookup(&[(BIND_ADDR_ENV, "  ")])).expect("config");
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().expect("addr"));
        assert_eq!(config.dist_dir, PathBuf::from("crates/cifdesk-ui/dist"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::infer());
    }

    #[test]
    fn explicit_values_are_used() {
        let config = EdgeConfig::from_lookup(lookup(&[
            (BIND_ADDR_ENV, "0.0.0.0:9000"),
            (DIST_DIR_ENV, "/srv/cifdesk"),
            (LOG_LEVEL_ENV, "debug"),
            (LOG_FORMAT_ENV, "json"),
        ]))
        .expect("config");
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/cifdesk"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            EdgeConfig::from_lookup(lookup(&[(BIND_ADDR_ENV, "localhost")])),
            Err(EdgeConfigError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            EdgeConfig::from_lookup(lookup(&[(LOG_FORMAT_ENV, "yaml")])),
            Err(EdgeConfigError::InvalidLogFormat { value }) if value == "yaml"
        ));
    }
}
