use crate::types::SignError;

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SCOPE_TERMINATOR: &str = "aws4_request";

/// Parsed authorization header information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationInfo {
    pub access_key_id: String,
    pub credential_scope: CredentialScope,
    pub signed_headers: Vec<String>,
    pub signature: String,
}

/// `DATE/REGION/SERVICE/aws4_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialScope {
    pub date: String,
    pub region: String,
    pub service: String,
}

impl std::fmt::Display for CredentialScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.date, self.region, self.service, SCOPE_TERMINATOR
        )
    }
}

/// Parse an AWS Signature Version 4 Authorization header.
///
/// Expected format: `AWS4-HMAC-SHA256 Credential=..., SignedHeaders=..., Signature=...`
pub fn parse_authorization_header(header: &str) -> Result<AuthorizationInfo, SignError> {
    // Format: AWS4-HMAC-SHA256 Credential=ASIAEXAMPLE/20230828/ap-southeast-2/medical-imaging/aws4_request,
    //         SignedHeaders=content-length;host;x-amz-date, Signature=fe4d9a8c...
    let parts = header
        .strip_prefix(ALGORITHM)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or_else(|| malformed("unexpected algorithm"))?;

    let mut credential = None;
    let mut signed_headers = None;
    let mut signature = None;

    for part in parts.split(',') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix("Credential=") {
            credential = Some(value);
        } else if let Some(value) = part.strip_prefix("SignedHeaders=") {
            signed_headers = Some(value);
        } else if let Some(value) = part.strip_prefix("Signature=") {
            signature = Some(value);
        }
    }

    let credential = credential.ok_or_else(|| malformed("missing Credential"))?;
    let signed_headers = signed_headers.ok_or_else(|| malformed("missing SignedHeaders"))?;
    let signature = signature.ok_or_else(|| malformed("missing Signature"))?;

    let credential_parts: Vec<&str> = credential.split('/').collect();
    let [access_key_id, date, region, service, terminator] = credential_parts[..] else {
        return Err(malformed("invalid credential format"));
    };
    if terminator != SCOPE_TERMINATOR {
        return Err(malformed("invalid credential scope terminator"));
    }

    Ok(AuthorizationInfo {
        access_key_id: access_key_id.to_string(),
        credential_scope: CredentialScope {
            date: date.to_string(),
            region: region.to_string(),
            service: service.to_string(),
        },
        signed_headers: signed_headers.split(';').map(|s| s.to_string()).collect(),
        signature: signature.to_string(),
    })
}

fn malformed(reason: &str) -> SignError {
    SignError::SigningFailed(format!("malformed authorization header: {}", reason))
}
