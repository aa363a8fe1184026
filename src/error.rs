//! Error handling for the HTTP envelope.
//!
//! Domain failures (unknown clubs, bad logins, missing applications) travel
//! inside the GraphQL response as field errors; this type only covers the
//! transport-level failures that happen before a request reaches the schema.

use axum::http::header::ToStrError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClubError {
    /// \[401\] The provided token does not match any live session.
    #[error("no login matches the provided token")]
    InvalidToken,
    /// \[400\] The token header was not valid UTF-8.
    #[error("invalid token header: {0}")]
    InvalidTokenHeader(#[from] ToStrError),
}

/// The return type for all endpoints.
pub type ClubResult<T> = Result<T, ClubError>;

impl ClubError {
    pub fn status(&self) -> StatusCode {
        match self {
            ClubError::InvalidToken => StatusCode::UNAUTHORIZED,
            ClubError::InvalidTokenHeader(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    message: String,
    status_code: u16,
}

impl IntoResponse for ClubError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            message: self.to_string(),
            status_code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}
