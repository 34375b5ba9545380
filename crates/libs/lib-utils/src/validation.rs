//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format with the same rule the browser applies to `type=email`.
pub fn validate_email(email: &str) -> Result<(), String> {
    if shared::utils::is_valid_email(email) {
        Ok(())
    } else {
        Err("Invalid email format".to_string())
    }
}

/// Validate maximum length, counted in characters.
pub fn validate_max_length(value: &str, max: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() > max {
        Err(format!("{} must be at most {} characters", field_name, max))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("x", "Email").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Email"),
            Err("Email cannot be empty".to_string())
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("alice.example.com").is_err());
    }

    #[test]
    fn test_validate_max_length_counts_chars() {
        assert!(validate_max_length("ééé", 3, "Reason").is_ok());
        assert_eq!(
            validate_max_length("abcd", 3, "Reason"),
            Err("Reason must be at most 3 characters".to_string())
        );
    }
}
