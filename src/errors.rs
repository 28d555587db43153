// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::models::validation::FieldError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation failed")]
  Validation(Vec<FieldError>),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Store(#[from] mongodb::error::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(details) => {
        HttpResponse::BadRequest().json(json!({"error": "Validation failed", "details": details}))
      }
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      // The driver error may carry connection strings; keep the body generic.
      AppError::Store(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;

  #[test]
  fn validation_maps_to_400_with_field_details() {
    let err = AppError::Validation(vec![FieldError::new("price", "must be greater than or equal to 0")]);
    let resp = err.error_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[test]
  fn not_found_maps_to_404() {
    let err = AppError::NotFound("Product not found".to_string());
    assert_eq!(err.error_response().status(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn config_maps_to_500() {
    let err = AppError::Config("Database not configured".to_string());
    assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn internal_maps_to_500() {
    let err = AppError::Internal("boom".to_string());
    assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
