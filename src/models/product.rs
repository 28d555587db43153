// src/models/product.rs

use serde::{Deserialize, Serialize};

use crate::models::validation::{FieldError, ValidationResult};
use crate::store::DocumentId;

fn default_currency() -> String {
  "INR".to_string()
}

/// Product creation payload. Required fields are enforced by deserialization;
/// value constraints by [`ProductIn::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIn {
  pub title: String,
  #[serde(default)]
  pub description: Option<String>,
  pub price: f64,
  #[serde(default = "default_currency")]
  pub currency: String,
  pub category: String,
  #[serde(default)]
  pub images: Vec<String>,
  #[serde(default)]
  pub materials: Vec<String>,
  #[serde(default)]
  pub stock: i64,
  #[serde(default)]
  pub vendor: Option<String>,
  #[serde(default)]
  pub artisan_story: Option<String>,
}

impl ProductIn {
  pub fn validate(&self) -> ValidationResult {
    let mut errors = Vec::new();
    if self.price < 0.0 {
      errors.push(FieldError::new("price", "must be greater than or equal to 0"));
    }
    if self.stock < 0 {
      errors.push(FieldError::new("stock", "must be greater than or equal to 0"));
    }
    if errors.is_empty() {
      Ok(())
    } else {
      Err(errors)
    }
  }
}

/// A persisted product as returned to clients. Deserialized from the stored
/// document (native `_id`), serialized with the public string `id` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  #[serde(rename(serialize = "id", deserialize = "_id"))]
  pub id: DocumentId,
  pub title: String,
  #[serde(default)]
  pub description: Option<String>,
  pub price: f64,
  #[serde(default = "default_currency")]
  pub currency: String,
  pub category: String,
  #[serde(default)]
  pub images: Vec<String>,
  #[serde(default)]
  pub materials: Vec<String>,
  #[serde(default)]
  pub stock: i64,
  #[serde(default)]
  pub vendor: Option<String>,
  #[serde(default)]
  pub artisan_story: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use mongodb::bson::{doc, oid::ObjectId};
  use serde_json::json;

  #[test]
  fn minimal_payload_gets_defaults() {
    let payload: ProductIn =
      serde_json::from_value(json!({"title": "Clay Pot", "price": 250, "category": "pottery"})).unwrap();
    assert!(payload.validate().is_ok());
    assert_eq!(payload.currency, "INR");
    assert_eq!(payload.stock, 0);
    assert!(payload.images.is_empty());
    assert!(payload.materials.is_empty());
    assert!(payload.description.is_none());
  }

  #[test]
  fn negative_price_is_rejected_with_field_detail() {
    let payload: ProductIn =
      serde_json::from_value(json!({"title": "Clay Pot", "price": -1, "category": "pottery"})).unwrap();
    let errors = payload.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "price");
  }

  #[test]
  fn missing_required_fields_fail_deserialization() {
    assert!(serde_json::from_value::<ProductIn>(json!({"price": 10, "category": "pottery"})).is_err());
    assert!(serde_json::from_value::<ProductIn>(json!({"title": "Clay Pot", "price": 10})).is_err());
  }

  #[test]
  fn artisan_story_uses_camel_case_on_the_wire() {
    let payload: ProductIn = serde_json::from_value(json!({
      "title": "Clay Pot", "price": 250, "category": "pottery",
      "artisanStory": "Hand-thrown in Jaipur."
    }))
    .unwrap();
    assert_eq!(payload.artisan_story.as_deref(), Some("Hand-thrown in Jaipur."));
  }

  #[test]
  fn stored_document_reshapes_native_id_into_public_string() {
    let stored = doc! {
      "_id": ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap(),
      "title": "Clay Pot",
      "price": 250.0,
      "currency": "INR",
      "category": "pottery",
      "images": [],
      "materials": [],
      "stock": 0i64,
    };
    let product: Product = mongodb::bson::from_document(stored).unwrap();
    let public = serde_json::to_value(&product).unwrap();
    assert_eq!(public["id"], json!("507f1f77bcf86cd799439011"));
    assert!(public.get("_id").is_none());
  }
}
