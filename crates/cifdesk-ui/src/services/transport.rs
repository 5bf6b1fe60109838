//! `fetch`-backed [`Transport`].

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::core::gateway::{ApiRequest, ApiResponse, Method, Transport, TransportError};

/// Sends requests through the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut req = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(token) = &request.bearer {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        if let Some(body) = &request.body {
            req = req.json(body).map_err(|err| TransportError::Send {
                detail: err.to_string(),
            })?;
        }
        let response = req.send().await.map_err(|err| TransportError::Send {
            detail: err.to_string(),
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|err| TransportError::Body {
            detail: err.to_string(),
        })?;
        Ok(ApiResponse { status, body })
    }
}
