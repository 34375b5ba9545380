//! Support page channels and contact form options

use crate::components::icons::IconKind;
use crate::utils::constants::{SECURITY_EMAIL, SUPPORT_EMAIL};

/// How a support channel is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelContact {
    Email(&'static str),
    Note(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportChannel {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub contact: ChannelContact,
}

pub const SUPPORT_CHANNELS: [SupportChannel; 3] = [
    SupportChannel {
        icon: IconKind::Mail,
        title: "Email Support",
        description: "Get help via email. We typically respond within 24 hours.",
        contact: ChannelContact::Email(SUPPORT_EMAIL),
    },
    SupportChannel {
        icon: IconKind::MessageSquare,
        title: "In-App Chat",
        description: "Chat with our AI assistant or reach support directly in the app.",
        contact: ChannelContact::Note("Available in Expenzez app"),
    },
    SupportChannel {
        icon: IconKind::Zap,
        title: "Quick Help",
        description: "Browse our help center for instant answers to common questions.",
        contact: ChannelContact::Note("Available 24/7"),
    },
];

/// Subjects offered by the "Still need help?" form. The first is the default.
pub const CONTACT_SUBJECTS: [&str; 8] = [
    "General Question",
    "Account Connection Issue",
    "Transaction Not Appearing",
    "AI Assistant Question",
    "Security Concern",
    "Feature Request",
    "Bug Report",
    "Other",
];

pub struct SecurityNotice {
    pub title: &'static str,
    pub body: &'static str,
    pub email: &'static str,
    pub response_time: &'static str,
}

pub const SECURITY_NOTICE: SecurityNotice = SecurityNotice {
    title: "Security Concerns?",
    body: "If you notice any suspicious activity on your accounts or have security concerns, contact us immediately and your bank directly.",
    email: SECURITY_EMAIL,
    response_time: "Response time: Within 1 hour",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_channels_use_company_domain() {
        for channel in SUPPORT_CHANNELS {
            if let ChannelContact::Email(address) = channel.contact {
                assert!(address.ends_with("@expenzez.com"));
            }
        }
        assert!(SECURITY_NOTICE.email.ends_with("@expenzez.com"));
    }

    #[test]
    fn test_default_subject() {
        assert_eq!(CONTACT_SUBJECTS[0], "General Question");
        assert!(CONTACT_SUBJECTS.contains(&"Bug Report"));
    }
}
