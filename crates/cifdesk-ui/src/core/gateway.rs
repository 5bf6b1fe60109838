//! Authorized request gateway.
//!
//! # Design
//! - Every API call goes through [`Gateway::call`], which attaches the bearer token.
//! - A 401 forces the session store's logout path; callers show no message for it.
//! - The transport is a trait so native tests can script responses.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use cifdesk_api_models::ErrorBody;
use cifdesk_auth::SessionStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// HTTP verbs used by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Wire name of the verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully resolved outbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    /// Verb.
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Bearer token to attach, if any.
    pub bearer: Option<String>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

/// Raw response as seen by the gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Server-provided `{ "error": ... }` message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        ErrorBody::parse(&self.body).message().map(str::to_string)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_str(&self.body).map_err(|err| GatewayError::Decode {
            detail: err.to_string(),
        })
    }
}

/// Failures raised by a [`Transport`] before any status is available.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be built or sent.
    #[error("request could not be sent")]
    Send {
        /// Underlying error text.
        detail: String,
    },
    /// The response body could not be read.
    #[error("response body could not be read")]
    Body {
        /// Underlying error text.
        detail: String,
    },
}

/// Outbound HTTP seam.
#[async_trait(?Send)]
pub trait Transport {
    /// Send the request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response could be obtained.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Errors surfaced to screens by [`Gateway`] calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The server could not be reached.
    #[error("network request failed")]
    Network {
        /// Transport detail for logs.
        detail: String,
    },
    /// The server rejected the session; logout has already run.
    #[error("session rejected by server")]
    Unauthorized,
    /// The server answered with a non-success status.
    #[error("server returned an error status")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, when present.
        message: Option<String>,
    },
    /// A request body could not be encoded.
    #[error("request body could not be encoded")]
    Encode {
        /// Encoder detail for logs.
        detail: String,
    },
    /// A response body could not be decoded.
    #[error("response body could not be decoded")]
    Decode {
        /// Decoder detail for logs.
        detail: String,
    },
}

impl GatewayError {
    /// Message to show the operator, or `None` when the failure is silent.
    ///
    /// Server messages win over `fallback`; transport failures use `network`.
    #[must_use]
    pub fn user_message(&self, fallback: &str, network: &str) -> Option<String> {
        match self {
            Self::Unauthorized => None,
            Self::Network { .. } => Some(network.to_string()),
            Self::Server {
                message: Some(message),
                ..
            } => Some(message.clone()),
            Self::Server { message: None, .. } | Self::Encode { .. } | Self::Decode { .. } => {
                Some(fallback.to_string())
            }
        }
    }
}

/// Token-attaching API client shared by every screen.
#[derive(Clone)]
pub struct Gateway {
    transport: Rc<dyn Transport>,
    session: SessionStore,
    base_url: Rc<str>,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Build a gateway over `transport` for the API rooted at `base_url`.
    #[must_use]
    pub fn new(transport: Rc<dyn Transport>, session: SessionStore, base_url: &str) -> Self {
        Self {
            transport,
            session,
            base_url: Rc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Session store consulted for the bearer token.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issue a request with the current token attached.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Network`] when the transport fails,
    /// [`GatewayError::Unauthorized`] on 401 (after logging out), and
    /// [`GatewayError::Server`] for any other non-2xx status.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, GatewayError> {
        let request = ApiRequest {
            method,
            url: self.url(path),
            bearer: self.session.token(),
            body,
        };
        debug!(method = method.as_str(), path, "api request");
        let response = self.transport.send(request).await.map_err(|err| {
            warn!(method = method.as_str(), path, error = %err, "api request failed");
            GatewayError::Network {
                detail: err.to_string(),
            }
        })?;

        if response.status == 401 {
            warn!(method = method.as_str(), path, "api rejected session; signing out");
            self.session.logout();
            return Err(GatewayError::Unauthorized);
        }
        if !response.is_success() {
            warn!(
                method = method.as_str(),
                path,
                status = response.status,
                "api returned error status"
            );
            return Err(GatewayError::Server {
                status: response.status,
                message: response.error_message(),
            });
        }
        Ok(response)
    }

    /// `GET` a path and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Propagates [`Gateway::call`] failures and [`GatewayError::Decode`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.call(Method::Get, path, None).await?.json()
    }

    /// Send a JSON body with the given verb.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Encode`] when `body` cannot be serialized and
    /// otherwise propagates [`Gateway::call`] failures.
    pub async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, GatewayError> {
        let value = serde_json::to_value(body).map_err(|err| GatewayError::Encode {
            detail: err.to_string(),
        })?;
        self.call(method, path, Some(value)).await
    }
}
