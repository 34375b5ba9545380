//! # Legal Documents
//!
//! The privacy policy and terms of service as data, rendered by one template
//! ([`crate::components::LegalPage`]).

mod privacy;
mod terms;

pub use privacy::PRIVACY_POLICY;
pub use terms::TERMS_OF_SERVICE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalDocument {
    pub title: &'static str,
    pub sections: &'static [Section],
    /// Highlighted box closing the document
    pub notice: Notice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    Subheading(&'static str),
    List(&'static [ListItem]),
    /// Sentence ending in a mailto link
    EmailLine { text: &'static str, email: &'static str },
    ContactBox(&'static [ContactLine]),
}

/// Bullet, optionally led by a bold label (`Consent:`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem {
    pub lead: Option<&'static str>,
    pub text: &'static str,
}

impl ListItem {
    pub const fn plain(text: &'static str) -> Self {
        Self { lead: None, text }
    }

    pub const fn led(lead: &'static str, text: &'static str) -> Self {
        Self { lead: Some(lead), text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLine {
    pub label: &'static str,
    pub value: ContactValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValue {
    Email(&'static str),
    Text(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub label: &'static str,
    pub text: &'static str,
}

impl LegalDocument {
    /// Every address the document links to.
    pub fn emails(&self) -> Vec<&'static str> {
        self.sections
            .iter()
            .flat_map(|section| section.blocks.iter())
            .flat_map(|block| match block {
                Block::EmailLine { email, .. } => vec![*email],
                Block::ContactBox(lines) => lines
                    .iter()
                    .filter_map(|line| match line.value {
                        ContactValue::Email(email) => Some(email),
                        ContactValue::Text(_) => None,
                    })
                    .collect(),
                _ => Vec::new(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_numbered(document: &LegalDocument) {
        for (i, section) in document.sections.iter().enumerate() {
            let prefix = format!("{}. ", i + 1);
            assert!(
                section.heading.starts_with(&prefix),
                "{}: section {} is {:?}",
                document.title,
                i + 1,
                section.heading
            );
            assert!(!section.blocks.is_empty());
        }
    }

    #[test]
    fn test_privacy_policy_structure() {
        assert_eq!(PRIVACY_POLICY.title, "Privacy Policy");
        assert_eq!(PRIVACY_POLICY.sections.len(), 11);
        assert_numbered(&PRIVACY_POLICY);
    }

    #[test]
    fn test_terms_structure() {
        assert_eq!(TERMS_OF_SERVICE.title, "Terms of Service");
        assert_eq!(TERMS_OF_SERVICE.sections.len(), 16);
        assert_numbered(&TERMS_OF_SERVICE);
    }

    #[test]
    fn test_contact_addresses() {
        let privacy = PRIVACY_POLICY.emails();
        assert!(privacy.contains(&"privacy@expenzez.com"));
        assert!(privacy.contains(&"support@expenzez.com"));

        let terms = TERMS_OF_SERVICE.emails();
        assert!(terms.contains(&"legal@expenzez.com"));
        assert!(terms.iter().all(|email| email.ends_with("@expenzez.com")));
    }
}
