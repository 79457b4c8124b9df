use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// Failure to produce a signed request
///
/// Callers only ever see one kind of failure: the variants exist so logs can
/// tell the causes apart, but every variant renders with the same prefix and
/// maps to the same HTTP 500 response.
#[derive(Debug)]
pub enum SignError {
    InvalidMethod(String),
    InvalidPath(String),
    InvalidBody(String),
    MissingCredentials(String),
    SigningFailed(String),
    SerializationFailed(String),
}

impl SignError {
    fn cause(&self) -> String {
        match self {
            SignError::InvalidMethod(method) => format!("invalid method '{}'", method),
            SignError::InvalidPath(msg) => format!("invalid path: {}", msg),
            SignError::InvalidBody(msg) => format!("invalid body: {}", msg),
            SignError::MissingCredentials(name) => format!("missing credentials: {}", name),
            SignError::SigningFailed(msg) => format!("signing failed: {}", msg),
            SignError::SerializationFailed(msg) => format!("serialization failed: {}", msg),
        }
    }

    pub fn message(&self) -> String {
        format!("could not produce a signed request: {}", self.cause())
    }
}

impl fmt::Display for SignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for SignError {}

impl IntoResponse for SignError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [("content-type", "text/plain; charset=utf-8")],
            self.message(),
        )
            .into_response()
    }
}
