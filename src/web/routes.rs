// src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{diagnostics_handlers, order_handlers, product_handlers};

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Health Check Routes
    .route("/", web::get().to(diagnostics_handlers::health_handler))
    .route("/health", web::get().to(diagnostics_handlers::health_handler))
    // Store Diagnostics Route
    .route("/diagnostics", web::get().to(diagnostics_handlers::diagnostics_handler))
    .service(
      web::scope("/api")
        // Product Routes
        .service(
          web::scope("/products")
            .route("", web::get().to(product_handlers::list_products_handler))
            .route("", web::post().to(product_handlers::create_product_handler))
            .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
        )
        // Order Routes
        .service(web::scope("/orders").route("", web::post().to(order_handlers::create_order_handler))),
    );
}
