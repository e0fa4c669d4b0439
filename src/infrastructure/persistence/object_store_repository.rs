//! Object store implementation of the mapping repository.

use async_trait::async_trait;
use object_store::path::Path;
use object_store::{ObjectStore, PutMode, PutOptions, PutPayload};
use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Mapping repository backed by a key-value object store.
///
/// Each mapping is stored as one object under `<prefix>/<code>` whose body is
/// the target URL, read by the redirect host that serves the short links.
/// The store backend (S3, local filesystem, in-memory) is selected at
/// startup; see [`crate::server`].
pub struct ObjectStoreMappingRepository {
    store: Arc<dyn ObjectStore>,
    prefix: Path,
}

impl ObjectStoreMappingRepository {
    /// Creates a new repository over a store client and key prefix.
    pub fn new(store: Arc<dyn ObjectStore>, prefix: Path) -> Self {
        Self { store, prefix }
    }

    fn location(&self, code: &str) -> Path {
        self.prefix.child(code)
    }
}

#[async_trait]
impl MappingRepository for ObjectStoreMappingRepository {
    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        match self.store.head(&self.location(code)).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(AppError::probe(e.to_string())),
        }
    }

    async fn create(&self, mapping: Mapping) -> Result<(), AppError> {
        let location = self.location(&mapping.code);
        let payload = PutPayload::from(mapping.target_url.into_bytes());
        let options = PutOptions {
            mode: PutMode::Create,
            ..Default::default()
        };

        match self.store.put_opts(&location, payload, options).await {
            Ok(_) => Ok(()),
            Err(object_store::Error::AlreadyExists { .. }) => {
                Err(AppError::conflict(mapping.code))
            }
            Err(e) => Err(AppError::write(e.to_string())),
        }
    }
}
