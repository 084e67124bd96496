//! Web-specific error types and conversions
//!
//! Every operation in this crate reports a single failure kind: an argument
//! that breaks its contract. Failures are raised before anything is written
//! to the response transport.

use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::response::Reply;

/// Web-specific error type for response construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebError {
    #[error("Invalid argument `{argument}`: {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        WebError::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Name of the offending argument
    pub fn argument(&self) -> &'static str {
        match self {
            WebError::InvalidArgument { argument, .. } => argument,
        }
    }
}

/// A handler that propagates a `WebError` with `?` answers with the
/// catch-all 500 envelope.
impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Response construction failed: {}", self);
        Reply::internal_error(self.to_string()).into_response()
    }
}
