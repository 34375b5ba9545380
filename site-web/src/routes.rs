//! Route table
//!
//! The five pages of the site, the paths they live at and the component each
//! one renders.

use leptos::prelude::*;

use crate::pages::{AccountDeletionPage, HomePage, PrivacyPage, SupportPage, TermsPage};

/// The component a route renders.
#[derive(Clone, Copy)]
pub struct Page {
    /// Type name of the page component.
    pub component: &'static str,
    render: fn() -> AnyView,
}

impl Page {
    pub fn render(&self) -> AnyView {
        (self.render)()
    }
}

macro_rules! page {
    ($component:ident) => {
        Page {
            component: std::any::type_name_of_val(&$component),
            render: || $component().into_any(),
        }
    };
}

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteRoute {
    Home,
    Support,
    Privacy,
    Terms,
    AccountDeletion,
}

/// Links shown in the navigation bar, in order.
pub const NAV_LINKS: [(SiteRoute, &str); 3] = [
    (SiteRoute::Home, "Home"),
    (SiteRoute::Support, "Support"),
    (SiteRoute::Privacy, "Privacy"),
];

impl SiteRoute {
    pub const ALL: [SiteRoute; 5] = [
        SiteRoute::Home,
        SiteRoute::Support,
        SiteRoute::Privacy,
        SiteRoute::Terms,
        SiteRoute::AccountDeletion,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::Support => "/support",
            SiteRoute::Privacy => "/privacy",
            SiteRoute::Terms => "/terms",
            SiteRoute::AccountDeletion => "/account-deletion",
        }
    }

    /// Full page name, used in the footer and the document title.
    pub fn title(self) -> &'static str {
        match self {
            SiteRoute::Home => "Home",
            SiteRoute::Support => "Support",
            SiteRoute::Privacy => "Privacy Policy",
            SiteRoute::Terms => "Terms of Service",
            SiteRoute::AccountDeletion => "Account Deletion",
        }
    }

    pub fn page(self) -> Page {
        match self {
            SiteRoute::Home => page!(HomePage),
            SiteRoute::Support => page!(SupportPage),
            SiteRoute::Privacy => page!(PrivacyPage),
            SiteRoute::Terms => page!(TermsPage),
            SiteRoute::AccountDeletion => page!(AccountDeletionPage),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Document title for the page at `path`.
pub fn document_title(path: &str) -> String {
    match SiteRoute::from_path(path) {
        Some(SiteRoute::Home) => "Expenzez - AI-Powered Expense Tracking".to_string(),
        Some(route) => format!("{} | Expenzez", route.title()),
        None => "Page Not Found | Expenzez".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_resolves_to_itself() {
        for route in SiteRoute::ALL {
            assert_eq!(SiteRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_every_route_renders_its_own_page() {
        let components: Vec<&str> = SiteRoute::ALL.iter().map(|r| r.page().component).collect();
        for (i, route) in SiteRoute::ALL.into_iter().enumerate() {
            let expected = format!("{:?}Page", route);
            assert!(
                components[i].ends_with(&expected),
                "{:?} renders {}",
                route,
                components[i]
            );
            assert!(!components[..i].contains(&components[i]), "{:?} shares a page", route);
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(SiteRoute::from_path("/support/"), None);
        assert_eq!(SiteRoute::from_path("/Support"), None);
        assert_eq!(SiteRoute::from_path("/support/faq"), None);
        assert_eq!(SiteRoute::from_path(""), None);
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title("/terms"), "Terms of Service | Expenzez");
        assert_eq!(document_title("/"), "Expenzez - AI-Powered Expense Tracking");
        assert_eq!(document_title("/missing"), "Page Not Found | Expenzez");
    }
}
