//! Account deletion form state
//!
//! `Editing → Submitting → Submitted`, with `Failed` when a real gateway rejects
//! the request. Submitted is terminal for the page session.

use shared::dto::deletion::AccountDeletionRequest;
use shared::utils::is_valid_email;
use thiserror::Error;

use crate::services::deletion::DeletionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftPhase {
    Editing,
    Submitting,
    Submitted { reference_id: String },
    Failed(DeletionError),
}

/// Why the draft refused to start a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Enter the email address associated with your Expenzez account")]
    InvalidEmail,
    #[error("Please confirm you understand this action is permanent")]
    NotAccepted,
    #[error("Your request is already being submitted")]
    AlreadySubmitting,
    #[error("Your request has already been submitted")]
    AlreadySubmitted,
}

/// Contents and progress of the deletion request form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRequestDraft {
    email: String,
    reason: String,
    accepted: bool,
    phase: DraftPhase,
    guard_error: Option<DraftError>,
}

impl Default for DeletionRequestDraft {
    fn default() -> Self {
        Self {
            email: String::new(),
            reason: String::new(),
            accepted: false,
            phase: DraftPhase::Editing,
            guard_error: None,
        }
    }
}

impl DeletionRequestDraft {
    pub fn new() -> Self {
        Self::default()
    }

    // region: --- Accessors
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn phase(&self) -> &DraftPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, DraftPhase::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, DraftPhase::Submitted { .. })
    }

    /// Fields can change while editing or after a failure, never mid-flight.
    pub fn is_editable(&self) -> bool {
        matches!(self.phase, DraftPhase::Editing | DraftPhase::Failed(_))
    }

    pub fn reference_id(&self) -> Option<&str> {
        match &self.phase {
            DraftPhase::Submitted { reference_id } => Some(reference_id),
            _ => None,
        }
    }

    /// Message to show under the form, if any.
    pub fn error_message(&self) -> Option<String> {
        match (&self.phase, self.guard_error) {
            (DraftPhase::Failed(error), _) => Some(error.to_string()),
            (_, Some(error)) => Some(error.to_string()),
            _ => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Submitting..."
        } else {
            "Submit Deletion Request"
        }
    }
    // endregion: --- Accessors

    // region: --- Edits
    pub fn set_email(&mut self, email: String) {
        if self.begin_edit() {
            self.email = email;
        }
    }

    pub fn set_reason(&mut self, reason: String) {
        if self.begin_edit() {
            self.reason = reason;
        }
    }

    pub fn set_accepted(&mut self, accepted: bool) {
        if self.begin_edit() {
            self.accepted = accepted;
        }
    }

    /// Any edit clears a previous failure and returns to editing.
    fn begin_edit(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.phase = DraftPhase::Editing;
        self.guard_error = None;
        true
    }
    // endregion: --- Edits

    // region: --- Transitions
    /// Check the guard and move to `Submitting`, returning the request to send.
    ///
    /// The email must be a well-formed address once trimmed and the
    /// confirmation box must be checked.
    pub fn begin_submit(&mut self) -> Result<AccountDeletionRequest, DraftError> {
        let result = self.check_guard();
        match &result {
            Ok(_) => {
                self.phase = DraftPhase::Submitting;
                self.guard_error = None;
            }
            Err(error) if self.is_editable() => self.guard_error = Some(*error),
            Err(_) => {}
        }
        result
    }

    fn check_guard(&self) -> Result<AccountDeletionRequest, DraftError> {
        match self.phase {
            DraftPhase::Submitting => return Err(DraftError::AlreadySubmitting),
            DraftPhase::Submitted { .. } => return Err(DraftError::AlreadySubmitted),
            DraftPhase::Editing | DraftPhase::Failed(_) => {}
        }
        if !is_valid_email(self.email.trim()) {
            return Err(DraftError::InvalidEmail);
        }
        if !self.accepted {
            return Err(DraftError::NotAccepted);
        }
        Ok(AccountDeletionRequest::new(&self.email, &self.reason))
    }

    /// The gateway accepted the request. Ignored unless submitting.
    pub fn complete(&mut self, reference_id: String) {
        if self.is_submitting() {
            self.phase = DraftPhase::Submitted { reference_id };
        }
    }

    /// The gateway rejected the request. Ignored unless submitting.
    pub fn fail(&mut self, error: DeletionError) {
        if self.is_submitting() {
            self.phase = DraftPhase::Failed(error);
        }
    }
    // endregion: --- Transitions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str, accepted: bool) -> DeletionRequestDraft {
        let mut draft = DeletionRequestDraft::new();
        draft.set_email(email.to_string());
        draft.set_accepted(accepted);
        draft
    }

    #[test]
    fn test_happy_path() {
        let mut draft = filled("alice@example.com", true);
        draft.set_reason("  Switching apps ".to_string());

        let request = draft.begin_submit().unwrap();
        assert_eq!(request.email, "alice@example.com");
        assert_eq!(request.reason.as_deref(), Some("Switching apps"));
        assert!(draft.is_submitting());
        assert_eq!(draft.submit_label(), "Submitting...");

        draft.complete("DDR-1760745600000".to_string());
        assert!(draft.is_submitted());
        assert_eq!(draft.reference_id(), Some("DDR-1760745600000"));
    }

    #[test]
    fn test_unchecked_box_stays_editing() {
        let mut draft = filled("alice@example.com", false);

        assert_eq!(draft.begin_submit(), Err(DraftError::NotAccepted));
        assert_eq!(draft.phase(), &DraftPhase::Editing);
        assert!(draft.error_message().is_some());

        // Fixing the field clears the message.
        draft.set_accepted(true);
        assert_eq!(draft.error_message(), None);
    }

    #[test]
    fn test_invalid_email_stays_editing() {
        for email in ["", "   ", "alice", "alice@", "alice@exa mple.com"] {
            let mut draft = filled(email, true);
            assert_eq!(draft.begin_submit(), Err(DraftError::InvalidEmail), "{:?}", email);
            assert_eq!(draft.phase(), &DraftPhase::Editing);
        }
    }

    #[test]
    fn test_surrounding_whitespace_in_email_is_accepted() {
        let mut draft = filled("  alice@example.com ", true);
        assert_eq!(draft.begin_submit().unwrap().email, "alice@example.com");
    }

    #[test]
    fn test_no_double_submit() {
        let mut draft = filled("alice@example.com", true);
        draft.begin_submit().unwrap();
        assert_eq!(draft.begin_submit(), Err(DraftError::AlreadySubmitting));

        draft.complete("DDR-1".to_string());
        assert_eq!(draft.begin_submit(), Err(DraftError::AlreadySubmitted));
        assert_eq!(draft.reference_id(), Some("DDR-1"));
    }

    #[test]
    fn test_fields_locked_while_submitting_and_after() {
        let mut draft = filled("alice@example.com", true);
        draft.begin_submit().unwrap();

        draft.set_email("mallory@example.com".to_string());
        assert_eq!(draft.email(), "alice@example.com");

        draft.complete("DDR-1".to_string());
        draft.set_accepted(false);
        assert!(draft.accepted());
        assert!(draft.is_submitted());
    }

    #[test]
    fn test_failure_returns_to_editing_on_next_edit() {
        let mut draft = filled("alice@example.com", true);
        draft.begin_submit().unwrap();
        draft.fail(DeletionError::Network("offline".to_string()));

        assert!(matches!(draft.phase(), DraftPhase::Failed(_)));
        assert!(draft.error_message().unwrap().contains("offline"));
        assert_eq!(draft.submit_label(), "Submit Deletion Request");

        draft.set_reason("Too many apps".to_string());
        assert_eq!(draft.phase(), &DraftPhase::Editing);
        assert_eq!(draft.error_message(), None);
    }

    #[test]
    fn test_resubmit_after_failure() {
        let mut draft = filled("alice@example.com", true);
        draft.begin_submit().unwrap();
        draft.fail(DeletionError::Validation("Invalid email format".to_string()));

        assert!(draft.begin_submit().is_ok());
        assert!(draft.is_submitting());
    }

    #[test]
    fn test_late_completion_ignored_when_not_submitting() {
        let mut draft = filled("alice@example.com", true);
        draft.complete("DDR-1".to_string());
        draft.fail(DeletionError::Network("late".to_string()));
        assert_eq!(draft.phase(), &DraftPhase::Editing);
    }

    #[test]
    fn test_two_submissions_get_distinct_references() {
        use crate::services::deletion::issue_reference_id;

        let mut references = Vec::new();
        for _ in 0..2 {
            let mut draft = filled("alice@example.com", true);
            draft.begin_submit().unwrap();
            draft.complete(issue_reference_id(1_760_745_600_000));
            references.push(draft.reference_id().unwrap().to_string());
        }

        assert!(references.iter().all(|r| r.starts_with("DDR-")));
        assert_ne!(references[0], references[1]);
    }
}
