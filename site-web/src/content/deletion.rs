//! Copy for the account deletion page.

use crate::utils::constants::DELETION_WINDOW_DAYS;

pub const PAGE_TITLE: &str = "Account Deletion Request";
pub const PAGE_INTRO: &str = "We're sorry to see you go. If you'd like to delete your Expenzez account, please fill out the form below or use the in-app deletion feature.";

/// A step in the in-app flow. `strong` is shown emphasised after `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InAppStep {
    pub text: &'static str,
    pub strong: Option<&'static str>,
}

pub const IN_APP_STEPS: [InAppStep; 4] = [
    InAppStep { text: "Open the Expenzez app", strong: None },
    InAppStep { text: "Go to ", strong: Some("Settings → Data & Privacy") },
    InAppStep { text: "Tap ", strong: Some("\"Delete Account\"") },
    InAppStep { text: "Confirm your decision", strong: None },
];

pub const IN_APP_NOTE: &str = "This is the fastest method and takes effect immediately.";

pub const EMAIL_REQUEST_ITEMS: [&str; 3] = [
    "Subject: \"Account Deletion Request\"",
    "Your registered email address",
    "Reason for deletion (optional)",
];

/// What deletion removes, listed in the warning box above the confirmation.
pub const REMOVED_DATA: [&str; 5] = [
    "Your profile and login credentials",
    "All transaction history and financial data",
    "Budget settings and preferences",
    "AI chat history and insights",
    "Notification settings and tokens",
];

pub const CONFIRMATION_LABEL: &str = "I understand this action is permanent and cannot be undone";
pub const EMAIL_PLACEHOLDER: &str = "your.email@example.com";
pub const EMAIL_HINT: &str = "Enter the email address associated with your Expenzez account";
pub const REASON_PLACEHOLDER: &str = "Help us improve by telling us why you're leaving...";

pub const CONTACT_REFERENCE_TIP: &str =
    "If you need to contact us about this request, please reference the ID above.";

/// Steps listed after a request is accepted. The first one names the
/// address the confirmation goes to.
pub fn next_steps() -> [String; 2] {
    [
        format!(
            "Your account and all associated data will be permanently deleted within {} days",
            DELETION_WINDOW_DAYS
        ),
        "You will receive a final confirmation email once the deletion is complete".to_string(),
    ]
}

pub fn gdpr_notice() -> String {
    format!(
        "We comply with UK GDPR and data protection regulations. Your data will be deleted within {} days of your request. For more information, see our",
        DELETION_WINDOW_DAYS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletion_window_in_copy() {
        assert!(next_steps()[0].contains("within 30 days"));
        assert!(gdpr_notice().contains("within 30 days of your request"));
    }

    #[test]
    fn test_removed_data_listed() {
        assert_eq!(REMOVED_DATA.len(), 5);
        assert!(REMOVED_DATA.iter().all(|item| !item.is_empty()));
    }
}
