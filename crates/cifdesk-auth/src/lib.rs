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
#![allow(clippy::module_name_repetitions)]
//! Operator session state and route gating for CIF Desk.
//!
//! The crate is DOM-free so the console (wasm) and the edge server (native)
//! share one definition of who is signed in and which paths require it.
//! Storage and transport are injected through the [`SessionPersistence`] and
//! [`Authenticator`] traits.

pub mod error;
pub mod guard;
pub mod session;

pub use error::{AuthError, AuthResult};
pub use guard::{
    GateDecision, HOME_PATH, LOGIN_PATH, TOKEN_COOKIE, ViewGate, edge_gate, is_gated_path,
    is_public_path, login_gate, token_from_cookie_header, view_gate,
};
pub use session::{
    AuthenticatedSession, Authenticator, Credentials, MemoryPersistence, Session,
    SessionPersistence, SessionStore, Subscription,
};
