use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use sigv4_proxy::{SignedRequest, auth::parse_authorization_header};

type HmacSha256 = Hmac<Sha256>;

/// Recompute the SigV4 signature for a descriptor from its own fields
///
/// Only the headers listed in `SignedHeaders` are canonicalized, so this checks
/// that the descriptor carries exactly what was signed. Assumes a path that
/// needs no normalization or percent-encoding and no query string.
pub fn expected_signature(signed: &SignedRequest, secret_access_key: &str) -> String {
    let auth_info = parse_authorization_header(&signed.headers.authorization).unwrap();
    let scope = &auth_info.credential_scope;

    let mut canonical_headers = String::new();
    for name in &auth_info.signed_headers {
        let value = match name.as_str() {
            "host" => &signed.headers.host,
            "content-type" => &signed.headers.content_type,
            "content-length" => &signed.headers.content_length,
            "x-amz-date" => &signed.headers.x_amz_date,
            "x-amz-security-token" => &signed.headers.x_amz_security_token,
            other => panic!("signed header '{}' is not part of the descriptor", other),
        };
        canonical_headers.push_str(name);
        canonical_headers.push(':');
        canonical_headers.push_str(value.trim());
        canonical_headers.push('\n');
    }

    let canonical_request = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        signed.method,
        signed.path,
        "",
        canonical_headers,
        auth_info.signed_headers.join(";"),
        hex::encode(Sha256::digest(signed.body.as_bytes()))
    );

    let string_to_sign = format!(
        "AWS4-HMAC-SHA256\n{}\n{}\n{}",
        signed.headers.x_amz_date,
        scope,
        hex::encode(Sha256::digest(canonical_request.as_bytes()))
    );

    let k_secret = format!("AWS4{}", secret_access_key);
    let k_date = hmac_sha256(k_secret.as_bytes(), scope.date.as_bytes());
    let k_region = hmac_sha256(&k_date, scope.region.as_bytes());
    let k_service = hmac_sha256(&k_region, scope.service.as_bytes());
    let k_signing = hmac_sha256(&k_service, b"aws4_request");

    hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes()))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).unwrap();
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
