// src/models/mod.rs

//! Payload and document types for the two collections, plus field-level
//! validation.

// Declare child modules for each model
pub mod customer;
pub mod order;
pub mod order_item;
pub mod product;
pub mod validation;

// Re-export the model structs for convenient access
pub use customer::Customer;
pub use order::{Order, OrderIn};
pub use order_item::OrderItem;
pub use product::{Product, ProductIn};
