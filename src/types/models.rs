use super::error::SignError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed request descriptor returned to the caller
///
/// Describes how to replay a request against the target service with valid
/// SigV4 authentication. Built once per invocation and never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedRequest {
    pub uri: String,
    pub path: String,
    pub service: String,
    pub host: String,
    pub method: String,
    pub body: String,
    pub headers: SignedRequestHeaders,
}

impl SignedRequest {
    /// Serialize to the JSON document returned by the HTTP adapter
    pub fn to_json(&self) -> Result<String, SignError> {
        serde_json::to_string(self).map_err(|e| SignError::SerializationFailed(e.to_string()))
    }
}

/// Headers read back from the signed request. Absent headers are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedRequestHeaders {
    pub host: String,
    #[serde(rename = "content-type")]
    pub content_type: String,
    #[serde(rename = "content-length")]
    pub content_length: String,
    pub authorization: String,
    #[serde(rename = "x-amz-date")]
    pub x_amz_date: String,
    #[serde(rename = "x-amz-security-token")]
    pub x_amz_security_token: String,
}

/// Credentials used to sign outbound requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .finish()
    }
}
