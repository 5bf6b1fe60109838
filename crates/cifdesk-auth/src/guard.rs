//! Route gating decisions.
//!
//! Two layers consult these functions: the edge server, which only sees the
//! `token` cookie, and the in-view guard, which sees the full [`Session`].
//! Neither validates the token; the API rejects stale tokens with 401.

use crate::session::Session;

/// Login screen path.
pub const LOGIN_PATH: &str = "/login";
/// Landing path for signed-in operators.
pub const HOME_PATH: &str = "/";
/// Cookie carrying the session token for the edge gate.
pub const TOKEN_COOKIE: &str = "token";

const PUBLIC_PATHS: &[&str] = &[LOGIN_PATH];
const EXCLUDED_SEGMENTS: &[&str] = &["api", "assets", "favicon.ico"];
const STATIC_EXTENSIONS: &[&str] = &[
    "js", "mjs", "wasm", "css", "map", "png", "jpg", "jpeg", "gif", "svg", "ico", "webp", "woff",
    "woff2", "ttf", "json", "txt",
];

/// Outcome of the edge gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Serve the request as-is.
    Proceed,
    /// Redirect to the given path.
    Redirect(&'static str),
}

/// Outcome of an in-view guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewGate {
    /// Session is still hydrating; show a spinner.
    Pending,
    /// Render the guarded content.
    Render,
    /// Navigate away to the given path.
    Redirect(&'static str),
}

/// Whether the path is a public (unauthenticated) route.
#[must_use]
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Whether the edge gate applies to `path`.
///
/// API calls, bundled assets, and the favicon bypass the gate.
#[must_use]
pub fn is_gated_path(path: &str) -> bool {
    let first_segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    if EXCLUDED_SEGMENTS.contains(&first_segment) {
        return false;
    }
    let last_segment = path.rsplit('/').next().unwrap_or("");
    match last_segment.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => !STATIC_EXTENSIONS
            .iter()
            .any(|known| extension.eq_ignore_ascii_case(known)),
        _ => true,
    }
}

/// Decide how the edge handles a page request given only token presence.
#[must_use]
pub fn edge_gate(path: &str, has_token: bool) -> GateDecision {
    if !is_gated_path(path) {
        return GateDecision::Proceed;
    }
    match (is_public_path(path), has_token) {
        (false, false) => GateDecision::Redirect(LOGIN_PATH),
        (true, true) if path == LOGIN_PATH => GateDecision::Redirect(HOME_PATH),
        _ => GateDecision::Proceed,
    }
}

/// Guard for protected views.
#[must_use]
pub const fn view_gate(session: &Session) -> ViewGate {
    match session {
        Session::Loading => ViewGate::Pending,
        Session::Anonymous => ViewGate::Redirect(LOGIN_PATH),
        Session::Authenticated(_) => ViewGate::Render,
    }
}

/// Guard for the login view: signed-in operators are sent home.
#[must_use]
pub const fn login_gate(session: &Session) -> ViewGate {
    match session {
        Session::Authenticated(_) => ViewGate::Redirect(HOME_PATH),
        Session::Loading | Session::Anonymous => ViewGate::Render,
    }
}

/// Extract a non-empty token from a raw `Cookie` header value.
#[must_use]
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == TOKEN_COOKIE)
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|value| !value.is_empty())
}
