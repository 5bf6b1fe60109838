//! Login collaborator backed by the API's `/api/login` endpoint.
//!
//! Login bypasses [`Gateway`](crate::core::gateway::Gateway): there is no token
//! to attach yet, and a 401 here means "wrong password", not "session expired".

use std::rc::Rc;

use async_trait::async_trait;
use cifdesk_api_models::{LoginRequest, LoginResponse};
use cifdesk_auth::{AuthError, AuthResult, Authenticator};

use crate::core::gateway::{ApiRequest, Method, Transport};

/// Login endpoint path.
pub const LOGIN_ENDPOINT: &str = "/api/login";

/// [`Authenticator`] that posts credentials to the API.
#[derive(Clone)]
pub struct ApiAuthenticator {
    transport: Rc<dyn Transport>,
    base_url: String,
}

impl ApiAuthenticator {
    /// Build an authenticator for the API rooted at `base_url`.
    #[must_use]
    pub fn new(transport: Rc<dyn Transport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Authenticator for ApiAuthenticator {
    async fn authenticate(&self, request: &LoginRequest) -> AuthResult<LoginResponse> {
        let body = serde_json::to_value(request).map_err(|err| AuthError::InvalidResponse {
            detail: err.to_string(),
        })?;
        let response = self
            .transport
            .send(ApiRequest {
                method: Method::Post,
                url: format!("{}{LOGIN_ENDPOINT}", self.base_url),
                bearer: None,
                body: Some(body),
            })
            .await
            .map_err(|err| AuthError::Network {
                detail: err.to_string(),
            })?;
        if !response.is_success() {
            return Err(AuthError::Rejected {
                message: response.error_message(),
            });
        }
        serde_json::from_str(&response.body).map_err(|err| AuthError::InvalidResponse {
            detail: err.to_string(),
        })
    }
}
