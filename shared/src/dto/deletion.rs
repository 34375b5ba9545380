use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account deletion request submitted from the web form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountDeletionRequest {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AccountDeletionRequest {
    /// Build a request from raw form input. Both fields are trimmed and a blank
    /// reason is dropped.
    pub fn new(email: &str, reason: &str) -> Self {
        let reason = reason.trim();
        Self {
            email: email.trim().to_string(),
            reason: (!reason.is_empty()).then(|| reason.to_string()),
        }
    }
}

/// Lifecycle of an accepted deletion request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeletionStatus {
    Pending,
    Completed,
}

/// Receipt returned once a deletion request has been accepted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountDeletionReceipt {
    pub reference_id: String,
    pub status: DeletionStatus,
    pub requested_at: DateTime<Utc>,
    /// Deadline by which the account data is erased
    pub purge_by: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_new_trims_and_drops_blank_reason() {
        let req = AccountDeletionRequest::new("  alice@example.com ", "   ");
        assert_eq!(req.email, "alice@example.com");
        assert_eq!(req.reason, None);

        let req = AccountDeletionRequest::new("alice@example.com", " Too many apps \n");
        assert_eq!(req.reason.as_deref(), Some("Too many apps"));
    }

    #[test]
    fn test_request_omits_missing_reason() {
        let req = AccountDeletionRequest::new("alice@example.com", "");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "alice@example.com" }));

        let parsed: AccountDeletionRequest =
            serde_json::from_str(r#"{"email":"bob@example.com"}"#).unwrap();
        assert_eq!(parsed.reason, None);
    }

    #[test]
    fn test_receipt_wire_shape() {
        let requested_at = DateTime::parse_from_rfc3339("2025-10-18T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let receipt = AccountDeletionReceipt {
            reference_id: "DDR-1760745600000".to_string(),
            status: DeletionStatus::Pending,
            requested_at,
            purge_by: requested_at + chrono::Duration::days(30),
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["reference_id"], "DDR-1760745600000");
        assert_eq!(json["purge_by"], "2025-11-17T00:00:00Z");
    }
}
