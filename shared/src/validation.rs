use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::constants::{
    EMAIL_REQUIRED_ERROR, INVALID_EMAIL_ERROR, MESSAGE_REQUIRED_ERROR, NAME_REQUIRED_ERROR,
};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub fn validate_required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message("required", message));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(error_with_message("required", EMAIL_REQUIRED_ERROR));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(error_with_message("invalid_email_format", INVALID_EMAIL_ERROR));
    }
    Ok(())
}

/// Message text for a failed field, falling back to the error code.
pub fn error_message(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field messages; `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<(), ContactErrors> {
        let errors = ContactErrors {
            name: validate_required(&self.name, NAME_REQUIRED_ERROR)
                .err()
                .map(|e| error_message(&e)),
            email: validate_email(&self.email).err().map(|e| error_message(&e)),
            message: validate_required(&self.message, MESSAGE_REQUIRED_ERROR)
                .err()
                .map(|e| error_message(&e)),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
