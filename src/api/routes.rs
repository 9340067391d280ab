//! API Routes
//!
//! Configures the Axum router with all product endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_feedback_handler, add_products_handler, delete_product_handler, health_handler,
    list_products_handler, search_products_handler, test_handler, update_product_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/products` - List every product
/// - `POST /api/products` - Append products
/// - `GET /api/products/search` - Filtered search
/// - `GET /api/products/test` - Liveness probe
/// - `PUT /api/products/:id` - Replace a product
/// - `DELETE /api/products/:id` - Delete a product
/// - `POST /api/products/feedback/:id` - Append feedback
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/products",
            get(list_products_handler).post(add_products_handler),
        )
        .route("/api/products/search", get(search_products_handler))
        .route("/api/products/test", get(test_handler))
        .route(
            "/api/products/:id",
            put(update_product_handler).delete(delete_product_handler),
        )
        .route("/api/products/feedback/:id", post(add_feedback_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
