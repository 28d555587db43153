// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::product::{Product, ProductIn};
use crate::state::AppState;
use crate::store::{self, DocumentId};

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 200;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub category: Option<String>,
  pub q: Option<String>,
  pub limit: Option<i64>,
}

/// Requested page size, clamped to bound response size.
fn effective_limit(requested: Option<i64>) -> i64 {
  requested.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT)
}

fn list_filter(query: &ListProductsQuery) -> Document {
  let mut filter = Document::new();
  // Empty parameters count as absent, so `?category=` returns everything.
  if let Some(category) = query.category.as_deref().filter(|v| !v.is_empty()) {
    filter.insert("category", category);
  }
  if let Some(q) = query.q.as_deref().filter(|v| !v.is_empty()) {
    // Passed through as a case-insensitive pattern, matching substrings.
    filter.insert("title", doc! { "$regex": q, "$options": "i" });
  }
  filter
}

#[instrument(name = "handler::list_products", skip(app_state, query))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let db = app_state.store()?;

  let products: Vec<Product> = db
    .collection::<Product>(store::PRODUCTS)
    .find(list_filter(&query))
    .limit(effective_limit(query.limit))
    .await?
    .try_collect()
    .await?;

  info!(count = products.len(), "Fetched products.");
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let db = app_state.store()?;
  let raw_id = path.into_inner();

  // A malformed identifier is indistinguishable from an absent record.
  let id = match DocumentId::parse(&raw_id) {
    Ok(id) => id,
    Err(_) => return Err(AppError::NotFound("Product not found".to_string())),
  };

  let product = db
    .collection::<Product>(store::PRODUCTS)
    .find_one(doc! { "_id": id })
    .await?;

  match product {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => Err(AppError::NotFound("Product not found".to_string())),
  }
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductIn>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  payload.validate().map_err(AppError::Validation)?;

  // open (no auth) for MVP
  let db = app_state.store()?;
  let product: Product = store::insert_and_fetch(db, store::PRODUCTS, &payload).await?;

  info!(product_id = %product.id, "Product created.");
  Ok(HttpResponse::Ok().json(product))
}
