use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::database::store::PhotoStore;

/// Collaborators shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PhotoStore>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    pub fn new(store: Arc<dyn PhotoStore>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { store, verifier }
    }
}
