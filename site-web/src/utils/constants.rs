//! Application constants

/// App Store listing for the iOS app
pub const APP_STORE_URL: &str = "https://apps.apple.com/us/app/expenzez/id6751338089";

pub const COMPANY_NAME: &str = "Biszaal Tech Ltd.";
pub const COMPANY_LOCATION: &str = "London, United Kingdom";

// Contact addresses
pub const SUPPORT_EMAIL: &str = "support@expenzez.com";
pub const PRIVACY_EMAIL: &str = "privacy@expenzez.com";
pub const LEGAL_EMAIL: &str = "legal@expenzez.com";
pub const SECURITY_EMAIL: &str = "security@expenzez.com";

/// Base URL of the deletion service, fixed at build time.
///
/// Unset (the default) keeps deletion requests simulated in the browser.
pub const API_BASE: Option<&str> = option_env!("EXPENZEZ_API_BASE");

/// Delay before a simulated deletion request completes
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1000;

/// Days within which account data is erased after a deletion request
pub const DELETION_WINDOW_DAYS: u32 = 30;
