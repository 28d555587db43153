// src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  // Both optional: the server starts without a store so that the
  // diagnostics endpoint can report the missing configuration.
  pub database_url: Option<String>,
  pub database_name: Option<String>,
}

impl AppConfig {
  /// Fallback database name used when DATABASE_URL is set but DATABASE_NAME is not.
  pub const DEFAULT_DATABASE_NAME: &'static str = "flames_blue";

  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|v| !v.is_empty());

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
    let server_port = get_env("PORT")
      .unwrap_or_else(|| "8000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;

    let database_url = get_env("DATABASE_URL");
    let database_name = get_env("DATABASE_NAME");

    if database_url.is_none() {
      tracing::warn!("DATABASE_URL is not set; store-backed endpoints will report a configuration error.");
    }

    tracing::info!("Application configuration loaded successfully.");
    // The connection string may embed credentials; never log its value.

    Ok(Self {
      server_host,
      server_port,
      database_url,
      database_name,
    })
  }

  /// Name of the database to open, applying the default when unset.
  pub fn effective_database_name(&self) -> &str {
    self.database_name.as_deref().unwrap_or(Self::DEFAULT_DATABASE_NAME)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn effective_database_name_defaults_when_unset() {
    let config = AppConfig {
      server_host: "0.0.0.0".to_string(),
      server_port: 8000,
      database_url: Some("mongodb://localhost:27017".to_string()),
      database_name: None,
    };
    assert_eq!(config.effective_database_name(), AppConfig::DEFAULT_DATABASE_NAME);
  }

  #[test]
  fn effective_database_name_prefers_configured_value() {
    let config = AppConfig {
      server_host: "0.0.0.0".to_string(),
      server_port: 8000,
      database_url: Some("mongodb://localhost:27017".to_string()),
      database_name: Some("artisan_shop".to_string()),
    };
    assert_eq!(config.effective_database_name(), "artisan_shop");
  }
}
