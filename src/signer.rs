use crate::{
    auth::{CredentialsSource, parse_authorization_header},
    config::SignerConfig,
    types::{SignError, SignedRequest, SignedRequestHeaders},
};
use aws_sigv4::http_request::{SignableBody, SignableRequest, SigningSettings, sign};
use aws_sigv4::sign::v4;
use chrono::{DateTime, Utc};
use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HOST};
use http::{HeaderMap, HeaderName, HeaderValue, Method, Request, Uri};
use std::sync::Arc;
use std::time::SystemTime;

const X_AMZ_DATE: &str = "x-amz-date";
const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";

/// Produces SigV4-signed request descriptors for a single target service.
///
/// The signer holds no per-request state: credentials are fetched from the
/// source on every call and everything else is built locally.
pub struct Signer {
    config: SignerConfig,
    credentials: Arc<dyn CredentialsSource>,
}

impl Signer {
    pub fn new(config: SignerConfig, credentials: Arc<dyn CredentialsSource>) -> Self {
        Self {
            config,
            credentials,
        }
    }

    /// Sign `method path` with `body` at the current wall-clock time
    pub fn sign(&self, method: &str, path: &str, body: &str) -> Result<SignedRequest, SignError> {
        self.sign_at(method, path, body, Utc::now())
    }

    /// Sign `method path` with `body` as of `time`
    ///
    /// The returned headers are read back from the request after the signing
    /// instructions were applied, never recomputed on the side.
    pub fn sign_at(
        &self,
        method: &str,
        path: &str,
        body: &str,
        time: DateTime<Utc>,
    ) -> Result<SignedRequest, SignError> {
        let host = &self.config.host;

        let http_method = Method::from_bytes(method.as_bytes())
            .map_err(|_| SignError::InvalidMethod(method.to_string()))?;
        let uri = build_uri(host, path)?;

        let mut request = Request::builder()
            .method(http_method)
            .uri(uri)
            .header(HOST, host.as_str())
            .header(CONTENT_LENGTH, body.len().to_string())
            .body(())
            .map_err(|e| SignError::InvalidPath(e.to_string()))?;

        let credentials = self.credentials.credentials()?;
        let identity = aws_credential_types::Credentials::new(
            credentials.access_key_id,
            credentials.secret_access_key,
            credentials.session_token,
            None,
            "sigv4-proxy",
        )
        .into();

        let signing_params = v4::SigningParams::builder()
            .identity(&identity)
            .region(self.config.region.as_str())
            .name(self.config.service.as_str())
            .time(SystemTime::from(time))
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| SignError::SigningFailed(e.to_string()))?
            .into();

        let uri_string = request.uri().to_string();
        let signable_headers = readable_headers(request.headers())?;
        let signable_request = SignableRequest::new(
            request.method().as_str(),
            uri_string.as_str(),
            signable_headers.into_iter(),
            SignableBody::Bytes(body.as_bytes()),
        )
        .map_err(|e| SignError::SigningFailed(e.to_string()))?;

        let (signing_instructions, _signature) = sign(signable_request, &signing_params)
            .map_err(|e| SignError::SigningFailed(e.to_string()))?
            .into_parts();
        let (new_headers, _new_query) = signing_instructions.into_parts();

        for header in new_headers {
            let name = HeaderName::from_bytes(header.name().as_bytes())
                .map_err(|e| SignError::SigningFailed(e.to_string()))?;
            let mut value = HeaderValue::from_str(header.value())
                .map_err(|e| SignError::SigningFailed(e.to_string()))?;
            value.set_sensitive(header.sensitive());
            request.headers_mut().insert(name, value);
        }

        let signed_headers = request.headers();
        let headers = SignedRequestHeaders {
            host: header_value(signed_headers, HOST.as_str())?,
            content_type: header_value(signed_headers, CONTENT_TYPE.as_str())?,
            content_length: header_value(signed_headers, CONTENT_LENGTH.as_str())?,
            authorization: header_value(signed_headers, AUTHORIZATION.as_str())?,
            x_amz_date: header_value(signed_headers, X_AMZ_DATE)?,
            x_amz_security_token: header_value(signed_headers, X_AMZ_SECURITY_TOKEN)?,
        };

        let auth_info = parse_authorization_header(&headers.authorization)?;
        let scope = &auth_info.credential_scope;
        if scope.region != self.config.region || scope.service != self.config.service {
            return Err(SignError::SigningFailed(format!(
                "unexpected credential scope {}",
                scope
            )));
        }

        tracing::debug!(
            "Signed {} {} for scope {} (signed headers: {})",
            method,
            path,
            scope,
            auth_info.signed_headers.join(";")
        );

        Ok(SignedRequest {
            uri: format!("https://{}{}", host, path),
            path: path.to_string(),
            service: self.config.service.clone(),
            host: host.clone(),
            method: method.to_string(),
            body: body.to_string(),
            headers,
        })
    }
}

fn build_uri(host: &str, path: &str) -> Result<Uri, SignError> {
    if !path.starts_with('/') {
        return Err(SignError::InvalidPath(format!(
            "'{}' does not start with '/'",
            path
        )));
    }

    format!("https://{}{}", host, path)
        .parse()
        .map_err(|e: http::uri::InvalidUri| SignError::InvalidPath(e.to_string()))
}

/// Every header handed to the signer must be readable, or the signature would
/// cover a different set than the request carries.
fn readable_headers(headers: &HeaderMap) -> Result<Vec<(&str, &str)>, SignError> {
    headers
        .iter()
        .map(|(name, value)| header_str(name.as_str(), value).map(|v| (name.as_str(), v)))
        .collect()
}

/// Absent headers read as `""`; present but unreadable ones are an error.
fn header_value(headers: &HeaderMap, name: &str) -> Result<String, SignError> {
    match headers.get(name) {
        Some(value) => Ok(header_str(name, value)?.to_string()),
        None => Ok(String::new()),
    }
}

fn header_str<'a>(name: &str, value: &'a HeaderValue) -> Result<&'a str, SignError> {
    value.to_str().map_err(|_| {
        SignError::SigningFailed(format!("header '{}' is not visible ASCII", name))
    })
}
