//! # Account Deletion Handlers
//!
//! HTTP handlers behind the account deletion page.
//!
//! ## Overview
//!
//! - Accepts a deletion request for the email address an Expenzez account is
//!   registered with and answers with a `DDR-<millis>` reference id.
//! - Stores the request as pending with a purge deadline `retention_days` later;
//!   the sweeper completes it once the deadline passes.
//! - Lets the requester look the request up by reference id.
//!
//! ## Example
//!
//! ```rust,no_run
//! use axum::{Router, routing::{get, post}};
//! use lib_web::{handlers::deletion::{get_deletion_status, request_deletion}, AppState};
//!
//! let app: Router<AppState> = Router::new()
//!     .route("/api/account-deletion", post(request_deletion))
//!     .route("/api/account-deletion/{reference_id}", get(get_deletion_status));
//! ```

use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
};
use lib_core::{
    dto::{AccountDeletionReceipt, AccountDeletionRequest},
    model::store::DeletionForCreate,
    AppError, Config, DbPool, DeletionRepository, ReferenceIssuer, Result,
};
use lib_utils::{now_utc, validate_email, validate_max_length};
use shared::utils::{mask_email, parse_reference_id, MAX_REASON_CHARS};
use tracing::{debug, info, instrument, warn};

/// Accept an account deletion request.
///
/// # Returns
///
/// * `202 Accepted` with an [`AccountDeletionReceipt`]
/// * `400` with `code = "InvalidInput"` for a malformed body, an invalid email or
///   an overlong reason
///
/// # Validation
///
/// - Email is trimmed, then must be a syntactically valid address
/// - Reason is trimmed; blank means no reason; at most 2000 characters
#[instrument(skip_all, fields(email = tracing::field::Empty))]
pub async fn request_deletion(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    State(issuer): State<ReferenceIssuer>,
    body: std::result::Result<Json<AccountDeletionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountDeletionReceipt>)> {
    let Json(req) = body.map_err(|rejection| {
        warn!("[DELETION] Rejected body: {}", rejection.body_text());
        AppError::InvalidInput("Request body must be JSON with an email field".to_string())
    })?;

    let data = validate_request(req)?;
    tracing::Span::current().record("email", tracing::field::display(mask_email(&data.email)));
    info!("[DELETION] New deletion request");
    debug!("   Reason given: {}", data.reason.is_some());

    let record = DeletionRepository::create(
        &pool,
        &issuer,
        data,
        now_utc(),
        config.retention_days,
    )
    .await?;

    let receipt = record.receipt();
    info!(
        reference_id = %receipt.reference_id,
        purge_by = %receipt.purge_by,
        "[DELETION] Request accepted"
    );

    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

/// Look up a deletion request by its reference id.
///
/// Anything that is not a `DDR-<digits>` id is treated as unknown.
#[instrument(skip(pool))]
pub async fn get_deletion_status(
    State(pool): State<DbPool>,
    Path(reference_id): Path<String>,
) -> Result<Json<AccountDeletionReceipt>> {
    let not_found = || AppError::NotFound(format!("No deletion request {}", reference_id));

    let millis = parse_reference_id(&reference_id).ok_or_else(not_found)?;
    let record = DeletionRepository::find_by_reference(&pool, millis)
        .await?
        .ok_or_else(not_found)?;

    debug!(status = ?record.status(), "[DELETION] Status lookup");
    Ok(Json(record.receipt()))
}

/// Trim and check a request, producing the row to store.
fn validate_request(req: AccountDeletionRequest) -> Result<DeletionForCreate> {
    let email = req.email.trim();
    validate_email(email).map_err(AppError::InvalidInput)?;

    let reason = req
        .reason
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());
    if let Some(reason) = reason {
        validate_max_length(reason, MAX_REASON_CHARS, "Reason").map_err(AppError::InvalidInput)?;
    }

    Ok(DeletionForCreate::new(
        email.to_string(),
        reason.map(str::to_string),
    ))
}

#[cfg(test)]
mod tests;
