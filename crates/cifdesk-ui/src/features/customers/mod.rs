//! CIF inquiry feature wiring.
//!
//! # Design
//! - Table, endpoints and copy are declared once in [`schema`]; the generic list
//!   controller does the rest.
//! - Create/edit validation stays DOM-free in [`form`] so it is testable natively.

pub mod form;
pub mod layout;
pub mod schema;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
