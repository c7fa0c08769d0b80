//! Field validation for the registration form.
//!
//! Validation is pure and order-sensitive: rules are checked top to bottom
//! and the first failing rule wins. It runs inside the submit workflow,
//! never in the reducer.

use crate::state::RegistrationFields;
use thiserror::Error;

/// Minimum password length, counted in `char`s rather than bytes.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// A failed validation rule.
///
/// The `Display` text is what the form shows the user, and what the reducer's
/// error-clearing affordance matches against, so the wording is load-bearing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// First name is empty or whitespace-only
    #[error("first name blank")]
    FirstNameBlank,

    /// Last name is empty or whitespace-only
    #[error("last name blank")]
    LastNameBlank,

    /// Password is empty or whitespace-only
    #[error("password must not be blank")]
    PasswordBlank,

    /// Password is shorter than [`MIN_PASSWORD_CHARS`]
    #[error("password must be 8 characters")]
    PasswordTooShort,

    /// Password and confirmation differ
    #[error("passwords must match")]
    PasswordMismatch,
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validate the registration fields, returning the first failing rule.
///
/// Total over all inputs; `None` means the fields are submittable.
#[must_use]
pub fn validate(fields: &RegistrationFields) -> Option<ValidationError> {
    if blank(&fields.first_name) {
        Some(ValidationError::FirstNameBlank)
    } else if blank(&fields.last_name) {
        Some(ValidationError::LastNameBlank)
    } else if blank(&fields.password) {
        Some(ValidationError::PasswordBlank)
    } else if fields.password.chars().count() < MIN_PASSWORD_CHARS {
        Some(ValidationError::PasswordTooShort)
    } else if fields.password != fields.confirm_password {
        Some(ValidationError::PasswordMismatch)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first: &str, last: &str, password: &str, confirm: &str) -> RegistrationFields {
        RegistrationFields {
            first_name: first.into(),
            last_name: last.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn empty_first_name_fails_first() {
        let result = validate(&fields("", "", "", ""));
        assert_eq!(result, Some(ValidationError::FirstNameBlank));
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let result = validate(&fields(" ", "x", "abcdefgh", "abcdefgh"));
        assert_eq!(result, Some(ValidationError::FirstNameBlank));
    }

    #[test]
    fn blank_last_name() {
        let result = validate(&fields("A", "\t", "abcdefgh", "abcdefgh"));
        assert_eq!(result, Some(ValidationError::LastNameBlank));
    }

    #[test]
    fn blank_password_reported_before_length() {
        let result = validate(&fields("A", "B", "   ", "   "));
        assert_eq!(result, Some(ValidationError::PasswordBlank));
    }

    #[test]
    fn short_password() {
        let result = validate(&fields("A", "B", "short", "short"));
        assert_eq!(result, Some(ValidationError::PasswordTooShort));
    }

    #[test]
    fn seven_chars_is_too_short_eight_is_enough() {
        assert_eq!(
            validate(&fields("A", "B", "abcdefg", "abcdefg")),
            Some(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate(&fields("A", "B", "abcdefgh", "abcdefgh")), None);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // Eight two-byte characters pass even though there are 16 bytes.
        let password = "éééééééé";
        assert_eq!(password.chars().count(), 8);
        assert_eq!(validate(&fields("A", "B", password, password)), None);
    }

    #[test]
    fn mismatched_passwords() {
        let result = validate(&fields("A", "B", "longenough1", "different"));
        assert_eq!(result, Some(ValidationError::PasswordMismatch));
    }

    #[test]
    fn valid_fields_pass() {
        let result = validate(&fields("A", "B", "longenough1", "longenough1"));
        assert_eq!(result, None);
    }

    #[test]
    fn messages_match_display_contract() {
        assert_eq!(ValidationError::FirstNameBlank.to_string(), "first name blank");
        assert_eq!(ValidationError::LastNameBlank.to_string(), "last name blank");
        assert_eq!(
            ValidationError::PasswordBlank.to_string(),
            "password must not be blank"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "password must be 8 characters"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "passwords must match"
        );
    }
}
