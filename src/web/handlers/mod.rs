// src/web/handlers/mod.rs

// Declare handler modules
pub mod diagnostics_handlers;
pub mod order_handlers;
pub mod product_handlers;
