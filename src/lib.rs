//! Feedback API - product catalogue with customer feedback
//!
//! Provides CRUD and search over products, with derived ratings, backed by a
//! TTL cache in front of an in-process collection.

pub mod api;
pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use domain::{Product, ProductSearchFilter};
pub use error::ProductError;
pub use service::{ProductService, ProductServices};
pub use tasks::spawn_cleanup_task;
