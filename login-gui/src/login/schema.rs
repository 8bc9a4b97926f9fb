//! Validation rules applied to the form before it is submitted.

use std::fmt;

pub const DEFAULT_PASSWORD_MIN_LEN: usize = 8;

/// Credentials collected from the form at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Password => write!(f, "password"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Password must be at least {0} characters long")]
    PasswordTooShort(usize),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidEmail => Field::Email,
            Self::PasswordTooShort(_) => Field::Password,
        }
    }
}

/// Every rule violated by an input, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn push(&mut self, error: ValidationError) {
        if self.get(error.field()).is_none() {
            self.0.push(error);
        }
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }

    /// Message to show next to `field`, if it is invalid.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", e.field(), e)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Capability checking a [`LoginInput`] before submission.
pub trait Schema {
    fn validate(&self, input: &LoginInput) -> Result<(), ValidationErrors>;
}

/// Default rules: a well formed email address with a top level domain and a
/// password of a minimum length.
#[derive(Debug, Clone)]
pub struct LoginSchema {
    pub password_min_len: usize,
}

impl LoginSchema {
    pub fn new(password_min_len: usize) -> Self {
        Self { password_min_len }
    }

    pub fn check_email(&self, email: &str) -> Result<(), ValidationError> {
        let address = email_address::EmailAddress::parse_with_options(
            email,
            email_address::Options::default()
                .with_required_tld()
                .without_display_text()
                .without_domain_literal(),
        )
        .map_err(|_| ValidationError::InvalidEmail)?;
        // Plain dot-atom local parts only.
        if address.local_part().starts_with('"') {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    pub fn check_password(&self, password: &str) -> Result<(), ValidationError> {
        if password.chars().count() < self.password_min_len {
            Err(ValidationError::PasswordTooShort(self.password_min_len))
        } else {
            Ok(())
        }
    }
}

impl Default for LoginSchema {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_MIN_LEN)
    }
}

impl Schema for LoginSchema {
    fn validate(&self, input: &LoginInput) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Err(e) = self.check_email(&input.email) {
            errors.push(e);
        }
        if let Err(e) = self.check_password(&input.password) {
            errors.push(e);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
