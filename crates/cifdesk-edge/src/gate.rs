//! Cookie gate for page requests.
//!
//! The gate only checks that a non-empty `token` cookie is present; the API
//! rejects stale tokens on its own.

use axum::extract::Request;
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use cifdesk_auth::{GateDecision, edge_gate, token_from_cookie_header};
use tracing::debug;

/// Whether any `Cookie` header on the request carries a token.
#[must_use]
pub fn has_token(request: &Request) -> bool {
    request
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|header| token_from_cookie_header(header).is_some())
}

/// Redirect page requests the gate rejects; pass everything else through.
pub async fn require_session_cookie(request: Request, next: Next) -> Response {
    let has_token = has_token(&request);
    match edge_gate(request.uri().path(), has_token) {
        GateDecision::Proceed => next.run(request).await,
        GateDecision::Redirect(target) => {
            debug!(path = %request.uri().path(), target, has_token, "edge gate redirect");
            Redirect::temporary(target).into_response()
        }
    }
}
