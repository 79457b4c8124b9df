use crate::signer::Signer;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub signer: Arc<Signer>,
}

impl AppState {
    pub fn new(signer: Signer) -> Self {
        Self {
            signer: Arc::new(signer),
        }
    }
}
