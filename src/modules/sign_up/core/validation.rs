use std::sync::LazyLock;

use regex::Regex;

use crate::modules::sign_up::core::fields::Field;

pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() >= MIN_PASSWORD_LENGTH {
        Ok(())
    } else {
        Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        })
    }
}

/// Inline rule for a single field. Username only needs to be present, which
/// gates submission but never renders an inline message.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Username => Ok(()),
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
    }
}
