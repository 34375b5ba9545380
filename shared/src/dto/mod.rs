//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the website and the deletion-request service.
//!
//! ## Module Organization
//!
//! - [`deletion`] - Account deletion request, receipt and error response
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/account-deletion
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "reason": "Switching apps"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 202 Accepted
//! Content-Type: application/json
//!
//! {
//!   "reference_id": "DDR-1760745600000",
//!   "status": "pending",
//!   "requested_at": "2025-10-18T00:00:00Z",
//!   "purge_by": "2025-11-17T00:00:00Z"
//! }
//! ```

pub mod deletion;

pub use deletion::*;
