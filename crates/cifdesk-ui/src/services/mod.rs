//! Browser-backed implementations of the core seams.

pub(crate) mod transport;
