//! Short link allocation service.

use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::CodeGenerator;

/// Allocates collision-free short codes and persists their mappings.
///
/// The allocation protocol per attempt: generate a random candidate, probe
/// the store for prior existence, and on a free candidate write the mapping
/// with a conditional create. A taken candidate or a lost probe-to-write
/// race retries with a fresh candidate; any ambiguous store failure aborts
/// immediately rather than looping on an uncertain signal.
pub struct ShortenService {
    repository: Arc<dyn MappingRepository>,
    generator: Arc<dyn CodeGenerator>,
    static_endpoint: String,
    max_attempts: usize,
}

impl ShortenService {
    /// Creates a new service.
    ///
    /// `static_endpoint` is the public base URL short links are composed
    /// from; `max_attempts` bounds the allocation retry loop.
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        generator: Arc<dyn CodeGenerator>,
        static_endpoint: String,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            static_endpoint,
            max_attempts,
        }
    }

    /// Allocates a free short code for `target_url` and persists the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Probe`] if an existence check fails for a reason
    /// other than "not found", [`AppError::Write`] if the store rejects the
    /// create for a non-conflict reason, and [`AppError::Exhausted`] if no
    /// free code is found within the attempt ceiling.
    pub async fn shorten(&self, target_url: String) -> Result<Mapping, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            if self.repository.exists(&code).await? {
                tracing::debug!(%code, attempt, "candidate code already taken");
                continue;
            }

            let mapping = Mapping::new(code, target_url.clone());
            match self.repository.create(mapping.clone()).await {
                Ok(()) => {
                    tracing::info!(code = %mapping.code, attempt, "short code allocated");
                    return Ok(mapping);
                }
                Err(AppError::Conflict { code }) => {
                    tracing::debug!(%code, attempt, "lost allocation race, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::warn!(attempts = self.max_attempts, "allocation attempts exhausted");
        Err(AppError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    /// Composes the public short URL for an allocated code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.static_endpoint.trim_end_matches('/'), code)
    }
}
