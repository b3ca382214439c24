//! Error types for calls against the IsraFlight backend.

use israflight_core::envelope::display_failure_body;
use israflight_core::{DisplayMessage, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Could not reach the backend, or the connection failed mid-request
    #[error("{message}")]
    Transport { message: String },

    /// Backend answered with a non-2xx status
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the JSON we expected
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String, body: String },

    /// Rejected before anything was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 4xx answers, which carry the backend's reason for refusing.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    /// Text for the user. Never empty.
    pub fn display_message(&self) -> DisplayMessage {
        match self {
            ApiError::Status { status, body } if body.trim().is_empty() => {
                DisplayMessage::new(format!("Request failed (HTTP {status})"))
            }
            ApiError::Status { body, .. } => display_failure_body(body),
            ApiError::MalformedResponse { body, .. } if !body.trim().is_empty() => {
                DisplayMessage::new(body.clone())
            }
            other => DisplayMessage::new(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::MalformedResponse {
                message: err.to_string(),
                body: String::new(),
            };
        }
        ApiError::Transport {
            message: err.to_string(),
        }
    }
}
