//! Regex-based e-mail syntax validation

use crate::domain::{DocketError, Result};
use regex::Regex;

/// Accepted e-mail shape: a letter-led local part, an alphanumeric-led domain,
/// and a purely alphabetic top-level domain.
const EMAIL_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9._-]*@[A-Za-z0-9][A-Za-z0-9._-]*\.[A-Za-z]+$";

/// Syntactic e-mail validator
///
/// Work items carry an opaque e-mail string; this collaborator owns the
/// format contract for it. The pattern is compiled once at construction.
///
/// # Examples
///
/// ```
/// use docket::validation::EmailValidator;
///
/// let validator = EmailValidator::new().unwrap();
/// assert!(validator.is_valid("a@b.com"));
/// assert!(!validator.is_valid("not-an-email"));
/// ```
pub struct EmailValidator {
    pattern: Regex,
}

impl EmailValidator {
    /// Creates a validator with the default e-mail pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(EMAIL_PATTERN)
            .map_err(|e| DocketError::Validation(format!("Invalid e-mail pattern: {e}")))?;
        Ok(Self { pattern })
    }

    /// Validates an e-mail string against the format contract
    ///
    /// # Errors
    ///
    /// Returns a [`DocketError::Validation`] if the string is empty or does
    /// not match the accepted shape.
    pub fn validate(&self, email: &str) -> Result<()> {
        if email.is_empty() {
            return Err(DocketError::Validation(
                "Email cannot be empty".to_string(),
            ));
        }
        if !self.pattern.is_match(email) {
            return Err(DocketError::Validation(format!(
                "Invalid email format: {email}"
            )));
        }
        Ok(())
    }

    /// Whether the e-mail string satisfies the format contract
    pub fn is_valid(&self, email: &str) -> bool {
        self.validate(email).is_ok()
    }
}
