pub mod error;
pub mod models;

pub use error::SignError;
pub use models::{Credentials, SignedRequest, SignedRequestHeaders};
