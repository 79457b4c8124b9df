use super::{TEST_ACCESS_KEY_ID, TEST_HOST, TEST_SECRET_ACCESS_KEY};
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use sigv4_proxy::{
    AppState, Credentials, CredentialsSource, Signer, SignerConfig, StaticCredentials, create_app,
};
use std::sync::Arc;
use tower::ServiceExt;

/// Router built with the production `create_app`, driven in-process
pub struct TestApp {
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestApp {
    /// App signing with the test credentials and an optional session token
    pub fn new(session_token: Option<&str>) -> Self {
        Self::with_source(Arc::new(StaticCredentials::new(test_credentials(
            session_token,
        ))))
    }

    pub fn with_source(credentials: Arc<dyn CredentialsSource>) -> Self {
        let signer = Signer::new(SignerConfig::new(TEST_HOST), credentials);
        Self {
            router: create_app(AppState::new(signer)),
        }
    }

    pub async fn send(&self, method: &str, uri: &str, body: impl Into<Body>) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body.into())
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

pub fn test_credentials(session_token: Option<&str>) -> Credentials {
    Credentials {
        access_key_id: TEST_ACCESS_KEY_ID.to_string(),
        secret_access_key: TEST_SECRET_ACCESS_KEY.to_string(),
        session_token: session_token.map(|t| t.to_string()),
    }
}
