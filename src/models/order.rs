// src/models/order.rs

use serde::{Deserialize, Serialize};

use crate::models::customer::Customer;
use crate::models::order_item::OrderItem;
use crate::models::validation::{FieldError, ValidationResult};
use crate::store::DocumentId;

fn default_status() -> String {
  "received".to_string()
}

/// Order creation payload. subtotal/shipping/total are accepted exactly as
/// submitted; the service does not recompute them from the items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderIn {
  pub customer: Customer,
  pub items: Vec<OrderItem>,
  pub subtotal: f64,
  #[serde(default)]
  pub shipping: f64,
  pub total: f64,
  #[serde(default = "default_status")]
  pub status: String,
}

impl OrderIn {
  pub fn validate(&self) -> ValidationResult {
    let mut errors = Vec::new();
    if self.items.is_empty() {
      errors.push(FieldError::new("items", "must contain at least one item"));
    }
    for (index, item) in self.items.iter().enumerate() {
      if item.qty < 1 {
        errors.push(FieldError::new(
          format!("items[{}].qty", index),
          "must be greater than or equal to 1",
        ));
      }
      if item.unit_price < 0.0 {
        errors.push(FieldError::new(
          format!("items[{}].unitPrice", index),
          "must be greater than or equal to 0",
        ));
      }
    }
    if errors.is_empty() {
      Ok(())
    } else {
      Err(errors)
    }
  }
}

/// A persisted order as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
  #[serde(rename(serialize = "id", deserialize = "_id"))]
  pub id: DocumentId,
  pub customer: Customer,
  pub items: Vec<OrderItem>,
  pub subtotal: f64,
  #[serde(default)]
  pub shipping: f64,
  pub total: f64,
  #[serde(default = "default_status")]
  pub status: String,
}
