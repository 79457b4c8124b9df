// Library exports for the binary and integration tests
pub mod app_state;
pub mod auth;
pub mod config;
pub mod handlers;
pub mod server;
pub mod signer;
pub mod types;

// Re-export commonly used types
pub use app_state::AppState;
pub use auth::{CredentialsSource, EnvCredentials, StaticCredentials};
pub use config::SignerConfig;
pub use signer::Signer;
pub use types::{Credentials, SignError, SignedRequest, SignedRequestHeaders};

// Re-export server creation function
pub use server::create_app;
