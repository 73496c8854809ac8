use std::sync::Arc;

use crate::{catalog::Catalog, config::Config};

/// Shared application state
///
/// Everything here is read-only after start-up, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub share_base_url: Arc<str>,
}

impl AppState {
    /// Creates state around an already loaded catalog
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            share_base_url: Arc::from(config.share_base_url.as_str()),
        }
    }
}
