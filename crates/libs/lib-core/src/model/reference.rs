//! # Reference Issuer
//!
//! Serializes reference-id issuance within one process. Identifiers are derived from
//! the request instant (`DDR-<millis>`), so two requests in the same millisecond would
//! otherwise collide; the issuer remembers the last value handed out and bumps past it.

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Last issued reference millis, shared by every handler.
#[derive(Clone, Debug, Default)]
pub struct ReferenceIssuer {
    last_issued: Arc<Mutex<Option<i64>>>,
}

impl ReferenceIssuer {
    /// Create an issuer that continues after an already persisted identifier.
    pub fn starting_after(last_issued: Option<i64>) -> Self {
        Self {
            last_issued: Arc::new(Mutex::new(last_issued)),
        }
    }

    /// Hold the issuer for the duration of one insert.
    ///
    /// The guard must only be updated after the record is stored.
    pub async fn lock(&self) -> MutexGuard<'_, Option<i64>> {
        self.last_issued.lock().await
    }
}
