//! Object store repository implementations.
//!
//! Concrete implementations of domain repository traits over the
//! `object_store` client.

pub mod object_store_repository;

pub use object_store_repository::ObjectStoreMappingRepository;
