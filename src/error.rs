// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types with consistent user-facing messages.

use serde::Deserialize;

/// Client error type returned by every API call and controller action.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No usable credentials for an endpoint that requires them.
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("HTTP {status}: {}", server_message.as_deref().unwrap_or("request failed"))]
    Api {
        status: u16,
        /// `error` field, falling back to `message`
        server_message: Option<String>,
        /// `message` field alone
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error body shapes the backend produces (`{"error": ...}` or `{"message": ...}`).
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ClientError {
    /// Build an API error from a non-success status and its raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let non_blank = |m: Option<String>| m.filter(|m| !m.trim().is_empty());
        let (error, message) = match parsed {
            Some(b) => (non_blank(b.error), non_blank(b.message)),
            None => (None, None),
        };

        ClientError::Api {
            status,
            server_message: error.or_else(|| message.clone()),
            message,
        }
    }

    /// HTTP status, if the error came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for missing local credentials or a 401 from the server.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ClientError::Unauthorized) || self.status() == Some(401)
    }

    /// True for a 403, which the backend uses for an expired subscription.
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    /// Message to surface to the user.
    ///
    /// Prefers the server's own message, then a validation message, then
    /// the call-site fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                server_message: Some(msg),
                ..
            } => msg.clone(),
            ClientError::Validation(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Like [`user_message`](Self::user_message), but only the body's
    /// `message` field counts. The `error` field often carries raw
    /// exception text the community views never show.
    pub fn server_message_or(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                message: Some(msg), ..
            } => msg.clone(),
            ClientError::Validation(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Result type alias for client calls.
pub type Result<T> = std::result::Result<T, ClientError>;
