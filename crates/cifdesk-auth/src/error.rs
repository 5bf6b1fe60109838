//! Authentication error primitives.

use thiserror::Error;

/// Fallback shown when a login attempt fails without a usable server message.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Errors surfaced by session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password was blank.
    #[error("email and password are required")]
    MissingCredentials,
    /// The authentication collaborator refused the credentials.
    #[error("credentials rejected")]
    Rejected {
        /// Server-provided reason, when one was returned.
        message: Option<String>,
    },
    /// The collaborator accepted the login but returned no token.
    #[error("login response missing token")]
    MissingToken,
    /// The collaborator could not be reached.
    #[error("authentication request failed")]
    Network {
        /// Transport-level detail for logs.
        detail: String,
    },
    /// The collaborator's reply could not be decoded.
    #[error("authentication response invalid")]
    InvalidResponse {
        /// Decoder detail for logs.
        detail: String,
    },
}

impl AuthError {
    /// Message suitable for display on the login form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredentials => "Email and password are required".to_string(),
            Self::Rejected {
                message: Some(message),
            } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. }
            | Self::MissingToken
            | Self::Network { .. }
            | Self::InvalidResponse { .. } => LOGIN_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Result alias for session operations.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_login_prefers_server_message() {
        let err = AuthError::Rejected {
            message: Some("Invalid email or password".to_string()),
        };
        assert_eq!(err.user_message(), "Invalid email or password");
        assert_eq!(err.to_string(), "credentials rejected");
    }

    #[test]
    fn opaque_failures_fall_back_to_generic_message() {
        let blank = AuthError::Rejected {
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message(), LOGIN_FAILED_MESSAGE);
        let network = AuthError::Network {
            detail: "connection refused".to_string(),
        };
        assert_eq!(network.user_message(), LOGIN_FAILED_MESSAGE);
        assert_eq!(AuthError::MissingToken.user_message(), LOGIN_FAILED_MESSAGE);
    }
}
