//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenService;
use crate::domain::repositories::MappingRepository;

/// Handles shared by all request handlers.
///
/// Built once at startup from validated configuration; handlers never read
/// ambient process state.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub mapping_repository: Arc<dyn MappingRepository>,
}

impl AppState {
    /// Creates new application state.
    pub fn new(
        shorten_service: Arc<ShortenService>,
        mapping_repository: Arc<dyn MappingRepository>,
    ) -> Self {
        Self {
            shorten_service,
            mapping_repository,
        }
    }
}
