//! # Formatting Utilities
//!
//! Date, copyright and `mailto:` formatting for the site pages.
//!
//! ## Functions
//!
//! - [`format_en_gb_date`] - `dd/mm/yyyy`, as British readers expect
//! - [`copyright_line`] - Footer copyright notice
//! - [`mailto_link`] - `mailto:` URL with encoded subject and body
//! - [`contact_message_body`] - Body text for the support contact form

use chrono::{Datelike, Local, NaiveDate};

/// Format a date the way `en-GB` locales print it (e.g. `18/10/2025`).
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use site_web::utils::format::format_en_gb_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
/// assert_eq!(format_en_gb_date(date), "07/03/2025");
/// ```
pub fn format_en_gb_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Today's date in the visitor's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The current calendar year in the visitor's local time zone.
pub fn current_year() -> i32 {
    today().year()
}

/// Footer copyright notice for `year`.
pub fn copyright_line(year: i32) -> String {
    format!("© {} Expenzez. All rights reserved.", year)
}

/// Build a `mailto:` URL with percent-encoded subject and body.
///
/// # Examples
///
/// ```rust
/// use site_web::utils::format::mailto_link;
///
/// assert_eq!(
///     mailto_link("support@expenzez.com", "Bug Report", "It & broke"),
///     "mailto:support@expenzez.com?subject=Bug%20Report&body=It%20%26%20broke"
/// );
/// ```
pub fn mailto_link(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Compose the email body sent from the support contact form.
///
/// Blank name or email lines are left out.
pub fn contact_message_body(name: &str, email: &str, message: &str) -> String {
    let mut body = String::new();
    let name = name.trim();
    let email = email.trim();

    if !name.is_empty() {
        body.push_str(&format!("Name: {}\n", name));
    }
    if !email.is_empty() {
        body.push_str(&format!("Email: {}\n", email));
    }
    if !body.is_empty() {
        body.push('\n');
    }
    body.push_str(message.trim());
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_en_gb_date() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        assert_eq!(format_en_gb_date(date), "18/10/2025");
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2025), "© 2025 Expenzez. All rights reserved.");
    }

    #[test]
    fn test_mailto_link_encodes_everything_after_the_address() {
        let link = mailto_link(
            "support@expenzez.com",
            "Transaction Not Appearing",
            "Name: Sam\n\n50% of rows missing?",
        );
        assert_eq!(
            link,
            "mailto:support@expenzez.com?subject=Transaction%20Not%20Appearing\
             &body=Name%3A%20Sam%0A%0A50%25%20of%20rows%20missing%3F"
        );
    }

    #[test]
    fn test_contact_message_body() {
        assert_eq!(
            contact_message_body(" Sam ", "sam@example.com", "Hello\n"),
            "Name: Sam\nEmail: sam@example.com\n\nHello"
        );
        assert_eq!(contact_message_body("", "  ", "Just this"), "Just this");
    }
}
