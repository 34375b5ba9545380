//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the website frontend (`site-web`) and the
//! deletion-request service (`site-server`). All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::deletion`]**: Account deletion requests, receipts and error bodies
//! - **[`utils`]**: Rules both sides must agree on
//!   - **[`utils::is_valid_email`]**: Email syntax check matching `<input type="email">`
//!   - **[`utils::format_reference_id`]**: `DDR-<millis>` reference identifiers
//!   - **[`utils::mask_email`]**: Redact an email address for logs
//!   - **[`utils::MAX_REASON_CHARS`]**: Longest deletion reason accepted
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Optional fields are omitted from JSON when `None`
//! - Timestamps are RFC 3339 strings (`chrono` with the `serde` feature)
//!
//! ## Usage in Backend
//!
//! ```rust,ignore
//! use shared::dto::deletion::{AccountDeletionRequest, AccountDeletionReceipt};
//! use axum::Json;
//!
//! async fn request_deletion(Json(request): Json<AccountDeletionRequest>) -> Json<AccountDeletionReceipt> {
//!     # todo!()
//! }
//! ```
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::deletion::AccountDeletionRequest;
//! use shared::utils::is_valid_email;
//!
//! let request = AccountDeletionRequest::new("alice@example.com", "");
//! assert!(is_valid_email(&request.email));
//! assert!(request.reason.is_none());
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
