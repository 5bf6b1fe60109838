//! Router construction and serving.
//!
//! # Design
//! - Unknown paths fall back to `index.html` so client-side routes resolve.
//! - The gate runs inside the trace span so redirects are traced too.

use std::time::Duration;

use axum::Router;
use axum::extract::Request;
use axum::middleware;
use axum::response::Response;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{Span, info, warn};

use crate::config::EdgeConfig;
use crate::error::{EdgeError, EdgeResult};
use crate::gate::require_session_cookie;

/// Build the edge router serving `config.dist_dir`.
#[must_use]
pub fn build_router(config: &EdgeConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_files = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                route = %request.uri().path(),
                status_code = tracing::field::Empty,
                latency_ms = tracing::field::Empty
            )
        })
        .on_request(|_request: &Request, _span: &Span| {})
        .on_response(|response: &Response, latency: Duration, span: &Span| {
            span.record("status_code", response.status().as_u16());
            let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
            span.record("latency_ms", latency_ms);
        });

    Router::new()
        .fallback_service(static_files)
        .layer(middleware::from_fn(require_session_cookie))
        .layer(trace_layer)
}

/// Bind `config.bind_addr` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns [`EdgeError::Io`] when binding or serving fails.
pub async fn serve(config: &EdgeConfig) -> EdgeResult<()> {
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| EdgeError::Io {
            operation: "bind",
            source,
        })?;
    info!(addr = %config.bind_addr, "edge listening");
    axum::serve(listener, build_router(config).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| EdgeError::Io {
            operation: "serve",
            source,
        })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
    }
    info!("edge shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{StatusCode, header};
    use std::fs;
    use tower::ServiceExt;

    const INDEX: &str = "<!doctype html><div id=\"root\"></div>";

    fn fixture() -> (tempfile::TempDir, Router) {
        let dist = tempfile::tempdir().expect("tempdir");
        fs::write(dist.path().join("index.html"), INDEX).expect("index");
        fs::create_dir(dist.path().join("assets")).expect("assets dir");
        fs::write(dist.path().join("assets").join("app.js"), "console.log(1);").expect("js");
        let config = EdgeConfig {
            bind_addr: "127.0.0.1:0".parse().expect("addr"),
            dist_dir: dist.path().to_path_buf(),
            log_level: "debug".to_string(),
            log_format: crate::telemetry::LogFormat::Pretty,
        };
        let router = build_router(&config);
        (dist, router)
    }

    fn get(path: &str, cookie: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).expect("request")
    }

    fn location(response: &Response) -> Option<&str> {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    #[tokio::test]
    async fn anonymous_page_requests_redirect_to_login() {
        let (_dist, router) = fixture();
        let response = router.oneshot(get("/admin", None)).await.expect("response");
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), Some("/login"));
    }

    #[tokio::test]
    async fn empty_cookie_counts_as_anonymous() {
        let (_dist, router) = fixture();
        let response = router
            .oneshot(get("/", Some("theme=dark; token=")))
            .await
            .expect("response");
        assert_eq!(location(&response), Some("/login"));
    }

    #[tokio::test]
    async fn signed_in_client_routes_fall_back_to_index() {
        let (_dist, router) = fixture();
        let response = router
            .oneshot(get("/approval", Some("token=abc123")))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        assert_eq!(body, INDEX.as_bytes());
    }

    #[tokio::test]
    async fn login_bounces_signed_in_clients_home() {
        let (_dist, router) = fixture();
        let signed_in = router
            .clone()
            .oneshot(get("/login", Some("token=abc123")))
            .await
            .expect("response");
        assert_eq!(location(&signed_in), Some("/"));

        let anonymous = router.oneshot(get("/login", None)).await.expect("response");
        assert_eq!(anonymous.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn assets_bypass_the_gate() {
        let (_dist, router) = fixture();
        let response = router
            .oneshot(get("/assets/app.js", None))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_paths_pass_without_a_cookie() {
        let (_dist, router) = fixture();
        let response = router
            .oneshot(get("/api/customers", None))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(location(&response), None);
    }

    #[tokio::test]
    async fn favicon_passes_without_a_cookie() {
        let (_dist, router) = fixture();
        let response = router
            .oneshot(get("/favicon.ico", None))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(location(&response), None);
    }
}
