use chrono::{DateTime, Utc};
use shared::dto::deletion::{AccountDeletionReceipt, DeletionStatus};
use shared::utils::format_reference_id;
use sqlx::FromRow;

/// Deletion request as stored in the `deletion_requests` table.
///
/// `email` and `reason` are `None` once the request has been completed.
#[derive(Debug, Clone, FromRow)]
pub struct DeletionRecord {
    pub reference_millis: i64,
    pub email: Option<String>,
    pub reason: Option<String>,
    pub status: String,
    pub requested_at_ms: i64,
    pub purge_by_ms: i64,
}

impl DeletionRecord {
    pub fn reference_id(&self) -> String {
        format_reference_id(self.reference_millis)
    }

    pub fn status(&self) -> DeletionStatus {
        match self.status.as_str() {
            "completed" => DeletionStatus::Completed,
            _ => DeletionStatus::Pending,
        }
    }

    /// Public view of the record, safe to send to the requester.
    pub fn receipt(&self) -> AccountDeletionReceipt {
        AccountDeletionReceipt {
            reference_id: self.reference_id(),
            status: self.status(),
            requested_at: from_millis(self.requested_at_ms),
            purge_by: from_millis(self.purge_by_ms),
        }
    }
}

fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

/// Data structure for creating a new deletion request.
///
/// Fields are expected to be validated and trimmed already.
#[derive(Debug, Clone)]
pub struct DeletionForCreate {
    pub email: String,
    pub reason: Option<String>,
}

impl DeletionForCreate {
    /// Create a new `DeletionForCreate` instance.
    pub fn new(email: String, reason: Option<String>) -> Self {
        Self { email, reason }
    }
}
