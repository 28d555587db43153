// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::order::{Order, OrderIn};
use crate::state::AppState;
use crate::store;

#[instrument(name = "handler::create_order", skip(app_state, payload))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<OrderIn>,
) -> Result<HttpResponse, AppError> {
  let payload = payload.into_inner();
  payload.validate().map_err(AppError::Validation)?;

  let db = app_state.store()?;
  let order: Order = store::insert_and_fetch(db, store::ORDERS, &payload).await?;

  info!(order_id = %order.id, items = order.items.len(), "Order created.");
  Ok(HttpResponse::Ok().json(order))
}
