//! API Handlers
//!
//! HTTP request handlers mapping each product endpoint onto the service.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::cache::{SharedCache, TtlCacheManager};
use crate::config::Config;
use crate::domain::{Product, ProductSearchFilter};
use crate::error::Result;
use crate::models::{FeedbackRequest, HealthResponse, SearchQuery};
use crate::service::{ProductService, ProductServices};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Product operations
    pub products: Arc<dyn ProductService>,
}

impl AppState {
    /// Creates a new AppState around any product service.
    pub fn new(products: Arc<dyn ProductService>) -> Self {
        Self { products }
    }

    /// Creates the AppState from configuration.
    ///
    /// Also returns the cache handle so the caller can run the cleanup task.
    pub fn from_config(config: &Config) -> (Self, SharedCache<Vec<Product>>) {
        let manager = TtlCacheManager::new(config.cache_ttl());
        let cache = manager.shared();
        let service = ProductServices::new(Arc::new(manager));
        (Self::new(Arc::new(service)), cache)
    }
}

/// Handler for GET /api/products
pub async fn list_products_handler(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    state.products.list_all().map(Json)
}

/// Handler for GET /api/products/search
pub async fn search_products_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Product>>> {
    let filter = ProductSearchFilter::from(query);
    debug!("Looking for product by model [{}]", filter);
    state.products.search(&filter).map(Json)
}

/// Handler for POST /api/products
///
/// A `null` body is passed through as absent input.
pub async fn add_products_handler(
    State(state): State<AppState>,
    Json(products): Json<Option<Vec<Product>>>,
) -> Result<Json<Vec<Product>>> {
    debug!(
        "Adding [{}] products",
        products.as_ref().map_or(0, Vec::len)
    );
    state.products.add_products(products).map(Json)
}

/// Handler for PUT /api/products/:id
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(product): Json<Option<Product>>,
) -> Result<Json<Product>> {
    debug!("Updating product [{}]", id);
    state.products.update_product(&id, product).map(Json)
}

/// Handler for DELETE /api/products/:id
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<String>> {
    debug!("Deleting product by id [{}]", id);
    state.products.delete_product(&id).map(Json)
}

/// Handler for POST /api/products/feedback/:id
pub async fn add_feedback_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(feedback): Json<FeedbackRequest>,
) -> Result<Json<Product>> {
    debug!("Add feedback to [{}]", id);
    state
        .products
        .add_feedback(&id, &feedback.key, feedback.value)
        .map(Json)
}

/// Handler for GET /api/products/test
pub async fn test_handler() -> Json<&'static str> {
    debug!("Test entered");
    Json("working")
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
