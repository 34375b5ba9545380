//! Page modules, one per route

pub mod account_deletion;
pub mod home;
pub mod not_found;
pub mod privacy;
pub mod support;
pub mod terms;

pub use account_deletion::AccountDeletionPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use privacy::PrivacyPage;
pub use support::SupportPage;
pub use terms::TermsPage;
