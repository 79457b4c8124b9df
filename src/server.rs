use crate::{app_state::AppState, handlers};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Create the application router
///
/// Every method and path is routed to the signer, mirroring a proxy trigger
/// that forwards all paths. Used by both main.rs and the integration tests.
pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        .fallback(handlers::sign_request)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
