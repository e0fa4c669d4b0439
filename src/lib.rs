//! # Shortlink
//!
//! A URL shortening service backed by key-value object storage.
//!
//! Each request allocates a short, collision-free code for a target URL,
//! persists the mapping in the object store, and returns the shortened
//! link. The core of the crate is the unique-key allocation protocol in
//! [`application::services::ShortenService`]: generate a random candidate,
//! probe the store for prior existence, and claim a free candidate with a
//! conditional create, retrying a bounded number of times on collision.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - The allocation protocol
//! - **Infrastructure Layer** ([`infrastructure`]) - Object store integration
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export STORE_URL="s3://my-bucket/links"      # or memory:/// locally
//! export STATIC_ENDPOINT="https://s.example.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenService;
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::{CodeGenerator, RandomCodeGenerator};
}
