use crate::{app_state::AppState, types::SignError};
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

/// ANY /{*path} - Sign the incoming request for the target service
///
/// The method, path and body of the inbound request become the request to
/// sign; the query string is not part of the signed path.
pub async fn sign_request(
    State(app_state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Response, SignError> {
    let path = uri.path();
    tracing::info!("Signing request: method={}, path={}", method, path);

    let result = String::from_utf8(body.to_vec())
        .map_err(|e| SignError::InvalidBody(e.to_string()))
        .and_then(|body| app_state.signer.sign(method.as_str(), path, &body))
        .and_then(|signed| signed.to_json());

    match result {
        Ok(json) => Ok((
            StatusCode::OK,
            [("content-type", "application/json")],
            json,
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Error signing request {} {}: {}", method, path, e);
            Err(e)
        }
    }
}
