#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Edge host for the CIF Desk console.
//!
//! Layout: `config.rs` (environment), `gate.rs` (cookie gate middleware),
//! `server.rs` (router and listener), `telemetry.rs` (subscriber setup).

/// Environment-driven configuration.
pub mod config;
/// Error types.
pub mod error;
/// Edge gate middleware.
pub mod gate;
/// Router construction and serving.
pub mod server;
/// Logging initialisation.
pub mod telemetry;

pub use config::EdgeConfig;
pub use error::{EdgeConfigError, EdgeError, EdgeResult};
pub use server::{build_router, serve};

use tracing::info;

/// Read configuration from the environment, install logging and serve.
///
/// # Errors
///
/// Returns an [`EdgeError`] when configuration is invalid, logging cannot be
/// installed, or the listener fails.
pub async fn run() -> EdgeResult<()> {
    let config = EdgeConfig::from_env()?;
    telemetry::init_logging(&config.log_level, config.log_format).map_err(|source| {
        EdgeError::Telemetry {
            source: source.into(),
        }
    })?;
    info!(
        bind_addr = %config.bind_addr,
        dist_dir = %config.dist_dir.display(),
        "edge configuration loaded"
    );
    serve(&config).await
}
