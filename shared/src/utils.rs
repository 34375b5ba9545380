//! # Shared Utility Functions
//!
//! Rules the website and the deletion service must apply identically.
//!
//! ## Email Syntax
//!
//! [`is_valid_email`] accepts exactly what a browser accepts for `<input type="email">`:
//! a non-empty local part of atext characters and dots, an `@`, and one or more
//! dot-separated domain labels of 1-63 alphanumerics/hyphens that neither start nor
//! end with a hyphen.
//!
//! ## Reference Identifiers
//!
//! Deletion requests are tracked with `DDR-<unix millis>` identifiers. An issuer keeps
//! the last value it handed out and calls [`next_reference_millis`] so that two
//! requests in the same millisecond still get distinct, increasing identifiers.
//!
//! ```rust
//! use shared::utils::{format_reference_id, next_reference_millis, parse_reference_id};
//!
//! let first = next_reference_millis(1_700_000_000_000, None);
//! let second = next_reference_millis(1_700_000_000_000, Some(first));
//! assert_eq!(format_reference_id(second), "DDR-1700000000001");
//! assert_eq!(parse_reference_id("DDR-1700000000001"), Some(second));
//! ```

/// Prefix shared by every deletion reference identifier.
pub const REFERENCE_ID_PREFIX: &str = "DDR-";

/// Longest free-text deletion reason accepted, in characters.
pub const MAX_REASON_CHARS: usize = 2000;

const LOCAL_PART_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";
const MAX_LABEL_LEN: usize = 63;

/// Check an email address against the HTML `type=email` syntax.
///
/// # Examples
///
/// ```rust
/// use shared::utils::is_valid_email;
///
/// assert!(is_valid_email("alice@example.com"));
/// assert!(is_valid_email("ops@localhost"));
/// assert!(!is_valid_email("alice@"));
/// assert!(!is_valid_email("alice@-example.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c));

    local_ok && !domain.is_empty() && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            label.len() <= MAX_LABEL_LEN
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

/// Format a reference identifier from a millisecond timestamp.
pub fn format_reference_id(millis: i64) -> String {
    format!("{}{}", REFERENCE_ID_PREFIX, millis)
}

/// Parse a reference identifier back into its millisecond component.
///
/// Returns `None` for anything that [`format_reference_id`] could not have produced.
pub fn parse_reference_id(reference_id: &str) -> Option<i64> {
    let digits = reference_id.strip_prefix(REFERENCE_ID_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // One spelling per id: no leading zeros.
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}

/// Pick the millisecond value for the next reference identifier.
///
/// Uses the clock reading unless it has not moved past the previously issued value,
/// in which case the previous value plus one is used.
pub fn next_reference_millis(now_millis: i64, last_issued: Option<i64>) -> i64 {
    match last_issued {
        Some(last) if now_millis <= last => last + 1,
        _ => now_millis,
    }
}

/// Redact an email address for logging, keeping the first character of the
/// local part and the full domain (e.g. `a***@example.com`).
///
/// Input without an `@` is fully redacted.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_email;
///
/// assert_eq!(mask_email("alice@example.com"), "a***@example.com");
/// assert_eq!(mask_email("not-an-email"), "***");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
