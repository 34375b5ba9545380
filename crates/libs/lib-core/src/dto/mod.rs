//! # Data Transfer Objects (DTOs)
//!
//! Wire types for the deletion-request API. They live in the `shared` crate so the
//! web frontend compiles against the same definitions.

pub use shared::dto::deletion::{
    AccountDeletionReceipt, AccountDeletionRequest, DeletionStatus, ErrorResponse,
};
