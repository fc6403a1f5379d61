//! Signed-in state supplied by the identity proxy in front of the dashboard.

use crate::errors::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};

/// The signed-in user. Extracting it from a signed-out request rejects the
/// request before the handler runs.
#[derive(Debug, Clone)]
pub struct Session {
    pub display_name: String,
}

pub enum SignInRequired {
    Page { sign_in_url: String },
    Api,
}

impl IntoResponse for SignInRequired {
    fn into_response(self) -> Response {
        match self {
            Self::Page { sign_in_url } => Redirect::to(&sign_in_url).into_response(),
            Self::Api => AppError::unauthorized().into_response(),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = SignInRequired;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let display_name = parts
            .headers
            .get(state.config.user_header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|name| !name.is_empty());

        match display_name {
            Some(name) => Ok(Session {
                display_name: name.to_string(),
            }),
            None if parts.uri.path().starts_with("/api/") => Err(SignInRequired::Api),
            None => Err(SignInRequired::Page {
                sign_in_url: state.config.sign_in_url.clone(),
            }),
        }
    }
}
