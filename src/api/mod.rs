//! API Module
//!
//! HTTP handlers and routing for the product feedback REST API.
//!
//! # Endpoints
//! - `GET /api/products` - List products
//! - `GET /api/products/search` - Search products
//! - `POST /api/products` - Add products
//! - `PUT /api/products/:id` - Update a product
//! - `DELETE /api/products/:id` - Delete a product
//! - `POST /api/products/feedback/:id` - Add feedback
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
