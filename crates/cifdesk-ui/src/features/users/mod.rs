//! Admin user management feature wiring.

pub mod layout;
pub mod schema;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
