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

//! Binary entrypoint for the CIF Desk edge host.

use cifdesk_edge::{EdgeResult, run};

/// Load configuration, install logging and serve until interrupted.
#[tokio::main]
async fn main() -> EdgeResult<()> {
    run().await
}
