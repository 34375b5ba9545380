//! Services
//!
//! Everything that leaves the page: currently only account deletion requests.

pub mod deletion;

pub use deletion::{DeletionError, DeletionGateway};
