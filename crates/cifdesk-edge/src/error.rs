//! # Design
//!
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use std::io;
use std::net::AddrParseError;

use thiserror::Error;

/// Result alias for edge operations.
pub type EdgeResult<T> = Result<T, EdgeError>;

/// Invalid environment configuration.
#[derive(Debug, Error)]
pub enum EdgeConfigError {
    /// The bind address did not parse.
    #[error("invalid bind address")]
    InvalidBindAddr {
        /// Raw value.
        value: String,
        /// Parse failure.
        source: AddrParseError,
    },
    /// The log format is neither `json` nor `pretty`.
    #[error("invalid log format")]
    InvalidLogFormat {
        /// Raw value.
        value: String,
    },
}

/// Top-level edge failure.
#[derive(Debug, Error)]
pub enum EdgeError {
    /// Configuration was rejected.
    #[error("configuration failed")]
    Config {
        /// Source configuration error.
        #[from]
        source: EdgeConfigError,
    },
    /// The tracing subscriber could not be installed.
    #[error("telemetry initialisation failed")]
    Telemetry {
        /// Source telemetry error.
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    /// Socket operations failed.
    #[error("listener operation failed")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Source I/O error.
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn config_errors_keep_their_source() {
        let source = "nope".parse::<std::net::SocketAddr>().unwrap_err();
        let err = EdgeError::from(EdgeConfigError::InvalidBindAddr {
            value: "nope".to_string(),
            source,
        });
        assert_eq!(err.to_string(), "configuration failed");
        let inner = err.source().expect("config source");
        assert_eq!(inner.to_string(), "invalid bind address");
        assert!(inner.source().is_some());
    }
}
