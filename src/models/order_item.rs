// src/models/order_item.rs

use serde::{Deserialize, Serialize};

/// One line item of an order. `product_id` is an opaque client-supplied
/// string; no integrity against the product collection is enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
  pub product_id: String,
  pub title: String,
  pub qty: i64,
  pub unit_price: f64,
}
