// src/state.rs
use crate::config::AppConfig;
use crate::errors::AppError;
use mongodb::Database;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  // None when DATABASE_URL is absent or the client could not be built at
  // startup. Never reassigned after startup.
  pub store: Option<Database>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Store handle for request handlers. Every store-touching handler calls
  /// this first so an unconfigured store surfaces as a 500.
  pub fn store(&self) -> Result<&Database, AppError> {
    self
      .store
      .as_ref()
      .ok_or_else(|| AppError::Config("Database not configured".to_string()))
  }
}
