//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer against the external
//! object store.

pub mod persistence;
