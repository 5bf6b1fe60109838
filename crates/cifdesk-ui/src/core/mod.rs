//! Core, DOM-free primitives for the console.
pub mod auth;
pub mod config;
pub mod detail;
pub mod format;
pub mod gateway;
pub mod list;
pub mod notify;
pub mod screen;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
