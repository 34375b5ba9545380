//! # HTTP Request Handlers
//!
//! Axum handlers for the site API, organized by feature domain.
//!
//! ## Handler Modules
//!
//! - **[`deletion`]**: Account deletion requests
//!   - `POST /api/account-deletion` - Accept a deletion request, returns a `DDR-` reference
//!   - `GET /api/account-deletion/{reference_id}` - Look up the status of a request
//!
//! Wrong methods on these paths answer `405 {"code":"MethodNotAllowed"}`.
//!
//! ## Error Handling
//!
//! Handlers return `Result<T, AppError>`. [`AppError`] renders itself as a status
//! code plus a JSON `{ "error", "code" }` body, so every API failure has the same
//! shape:
//!
//! ```rust,ignore
//! Err(AppError::InvalidInput("Invalid email format".to_string()))
//! // -> 400 {"error":"Invalid email format","code":"InvalidInput"}
//! ```
//!
//! ## Request/Response Flow
//!
//! ```text
//! Client Request
//!     ↓
//! CORS Middleware (tower-http)
//!     ↓
//! Request stamping + logging
//!     ↓
//! Handler (validation, store)
//!     ↓
//! Response (JSON serialization)
//! ```

pub mod deletion;

use axum::http::{Method, Uri};
use lib_core::AppError;

/// Any `/api` path without a route. Keeps API clients from receiving the HTML
/// document the page fallback would serve.
pub async fn api_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No API route for {}", uri.path()))
}

/// Known API path, unsupported method. Same JSON error shape as every other
/// API failure instead of axum's empty 405.
pub async fn api_method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} is not supported on {}", method, uri.path()))
}
