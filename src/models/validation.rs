// src/models/validation.rs

use serde::Serialize;

/// One rejected field of a request payload, reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field: String,
  pub message: String,
}

impl FieldError {
  pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      field: field.into(),
      message: message.into(),
    }
  }
}

/// Outcome of validating a payload: `Ok(())` or every offending field.
pub type ValidationResult = Result<(), Vec<FieldError>>;
