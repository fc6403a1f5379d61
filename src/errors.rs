use crate::backend::LookupError;
use crate::reference::{EmptyChannel, ResolveError};
use axum::http::StatusCode;
use tracing::warn;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "Sign in required".to_string(),
        }
    }

    pub fn bad_gateway() -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: "Lookup failed".to_string(),
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(_: ResolveError) -> Self {
        Self::bad_request("Please enter a valid video ID or URL")
    }
}

impl From<EmptyChannel> for AppError {
    fn from(_: EmptyChannel) -> Self {
        Self::bad_request("Please enter a channel ID, handle or username")
    }
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        warn!("lookup failed: {err}");
        Self::bad_gateway()
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
