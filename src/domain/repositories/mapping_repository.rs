//! Repository trait for short link mappings.

use crate::domain::entities::Mapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for short link mappings.
///
/// The backing store is eventually consistent key-value object storage; only
/// the two operations the allocation protocol needs are modeled.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::ObjectStoreMappingRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Probes the store for a short code.
    ///
    /// "Not found" is a definitive answer from the store and yields
    /// `Ok(false)`; it is never conflated with a failed probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Probe`] when the store answers with anything other
    /// than found / not found (network, auth, unexpected store errors).
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Persists a mapping with a conditional create.
    ///
    /// The write succeeds only if the code is not already present, so a
    /// concurrent allocator losing the probe-to-write race observes an
    /// explicit conflict instead of silently overwriting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Write`] on any other store failure.
    async fn create(&self, mapping: Mapping) -> Result<(), AppError>;
}
