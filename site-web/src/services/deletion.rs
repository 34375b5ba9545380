//! # Account Deletion Gateway
//!
//! Hands a deletion request to whatever fulfils it and returns the reference id
//! shown to the user.
//!
//! - [`DeletionGateway::Simulated`] waits a fixed delay and issues a `DDR-<millis>`
//!   reference in the browser. This is the default build.
//! - [`DeletionGateway::Http`] posts to the site server's
//!   `POST /api/account-deletion` and uses the reference from its receipt. Chosen
//!   when the app is built with `EXPENZEZ_API_BASE` set.

use std::cell::Cell;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use shared::dto::deletion::{AccountDeletionReceipt, AccountDeletionRequest, ErrorResponse};
use shared::utils::{format_reference_id, next_reference_millis};
use thiserror::Error;

use crate::utils::constants::{API_BASE, SIMULATED_SUBMIT_DELAY_MS};

/// Why a deletion request did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeletionError {
    /// The server rejected the input (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// The request could not be sent or the response could not be read.
    #[error("We couldn't reach our servers ({0}). Please check your connection and try again.")]
    Network(String),

    /// Any other non-success response.
    #[error("Something went wrong on our side ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Where deletion requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionGateway {
    Simulated { delay_ms: u32 },
    Http { api_base: String },
}

impl DeletionGateway {
    /// Gateway selected by the build: HTTP when `EXPENZEZ_API_BASE` was set.
    pub fn from_build_config() -> Self {
        Self::from_api_base(API_BASE)
    }

    fn from_api_base(api_base: Option<&str>) -> Self {
        match api_base.map(str::trim).filter(|base| !base.is_empty()) {
            Some(base) => DeletionGateway::Http {
                api_base: base.trim_end_matches('/').to_string(),
            },
            None => DeletionGateway::Simulated {
                delay_ms: SIMULATED_SUBMIT_DELAY_MS,
            },
        }
    }

    /// Submit a request, resolving to its reference id.
    pub async fn submit(&self, request: AccountDeletionRequest) -> Result<String, DeletionError> {
        match self {
            DeletionGateway::Simulated { delay_ms } => {
                let submitted_at = js_sys::Date::now() as i64;
                TimeoutFuture::new(*delay_ms).await;
                let reference_id = issue_reference_id(submitted_at);
                log::info!("[DELETION] Simulated request accepted: {}", reference_id);
                Ok(reference_id)
            }
            DeletionGateway::Http { api_base } => submit_http(api_base, &request).await,
        }
    }
}

async fn submit_http(
    api_base: &str,
    request: &AccountDeletionRequest,
) -> Result<String, DeletionError> {
    let url = format!("{}/api/account-deletion", api_base);
    log::debug!("[DELETION] POST {}", url);

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| DeletionError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| DeletionError::Network(e.to_string()))?;

    let status = response.status();
    if response.ok() {
        let receipt = response
            .json::<AccountDeletionReceipt>()
            .await
            .map_err(|e| DeletionError::Network(e.to_string()))?;
        log::info!("[DELETION] Request accepted: {}", receipt.reference_id);
        return Ok(receipt.reference_id);
    }

    let body = response.text().await.unwrap_or_default();
    let error = classify_failure(status, &body);
    log::warn!("[DELETION] Request failed: {:?}", error);
    Err(error)
}

/// Map a non-success response to a [`DeletionError`], preferring the server's
/// own message when the body is an [`ErrorResponse`].
pub fn classify_failure(status: u16, body: &str) -> DeletionError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| format!("HTTP {}", status));

    match status {
        400 => DeletionError::Validation(message),
        _ => DeletionError::Server { status, message },
    }
}

thread_local! {
    static LAST_ISSUED: Cell<Option<i64>> = const { Cell::new(None) };
}

/// Issue a reference id for a submission at `now_millis`. Ids from one page
/// session are strictly increasing even if the clock reading repeats.
pub fn issue_reference_id(now_millis: i64) -> String {
    LAST_ISSUED.with(|last| {
        let millis = next_reference_millis(now_millis, last.get());
        last.set(Some(millis));
        format_reference_id(millis)
    })
}
