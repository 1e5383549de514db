use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum length of a contact form message
pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Form input failures; the `Display` text is what the user sees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    EmptyName,
    #[error("Please enter your email address")]
    EmptyEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your password")]
    EmptyPassword,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must agree to the terms of service")]
    TermsNotAccepted,
    #[error("Please enter a subject")]
    EmptySubject,
    #[error("Message must be at least {0} characters")]
    MessageTooShort(usize),
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Registration password rules: minimum length, then confirmation match
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("  demo@nexclaw.io "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two words@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_validate_email_distinguishes_empty() {
        assert_eq!(validate_email("   "), Err(ValidationError::EmptyEmail));
        assert_eq!(validate_email("nope"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b.com"), Ok(()));
    }

    #[test]
    fn test_validate_new_password() {
        assert_eq!(
            validate_new_password("short", "short"),
            Err(ValidationError::PasswordTooShort(8))
        );
        assert_eq!(
            validate_new_password("longenough1", "longenough2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(validate_new_password("longenough1", "longenough1"), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::PasswordTooShort(8).to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(ValidationError::EmptyName.to_string(), "Please enter your name");
    }
}
