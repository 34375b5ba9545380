//! # Core Library
//!
//! Configuration, error type, and the deletion-request store.

pub mod config;
pub mod error;
pub mod model;
pub mod dto;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use model::store::{DbPool, create_pool, run_migrations};
pub use model::store::DeletionRepository;
pub use model::ReferenceIssuer;
