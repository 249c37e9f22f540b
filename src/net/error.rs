//! Failure taxonomy for backend calls and its display normalization.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends up as one human-readable string in `AuthState.error`;
//! nothing propagates past the store to the views.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const FALLBACK_MESSAGE: &str = "Something went wrong";
pub const UNAUTHORIZED: u16 = 401;

/// Errors produced by HTTP transport and response handling.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status {
        status: u16,
        /// Generic transport text, e.g. `Request failed with status code 401`.
        message: String,
        /// Parsed JSON error body, when the server sent one.
        body: Option<serde_json::Value>,
    },
    /// No response was received.
    #[error("{message}")]
    Network { message: String },
    /// Local runtime failure (encoding, decoding, request building).
    #[error("{message}")]
    Unexpected { message: String },
    /// A failure that carries no message at all.
    #[error("unknown failure")]
    Unknown,
}

impl ApiError {
    /// Build a status error from a raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: format!("Request failed with status code {status}"),
            body: serde_json::from_str(body).ok(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(UNAUTHORIZED)
    }
}

/// Normalize a failure into a display string.
///
/// Priority: server body `message`, then transport message, then runtime
/// message, then [`FALLBACK_MESSAGE`]. A body `message` is used whenever it is
/// a string, even an empty one; empty transport and runtime messages count as
/// absent.
pub fn error_message(error: &ApiError) -> String {
    let message = match error {
        ApiError::Status { message, body, .. } => body_message(body.as_ref()).or_else(|| non_empty(message)),
        ApiError::Network { message } | ApiError::Unexpected { message } => non_empty(message),
        ApiError::Unknown => None,
    };
    message.unwrap_or_else(|| FALLBACK_MESSAGE.to_owned())
}

fn body_message(body: Option<&serde_json::Value>) -> Option<String> {
    body?.get("message")?.as_str().map(str::to_owned)
}

fn non_empty(message: &str) -> Option<String> {
    (!message.is_empty()).then(|| message.to_owned())
}
