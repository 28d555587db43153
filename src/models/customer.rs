// src/models/customer.rs

use serde::{Deserialize, Serialize};

/// Customer details attached to an order. Only the name is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
  pub name: String,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default)]
  pub address: Option<String>,
}
