//! HTTP server and routes.

/// Request handlers.
pub mod handlers;
mod state;

pub use state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/books", get(handlers::list_books))
        .route("/books/{id}", get(handlers::book_detail))
        .route("/trigger-scraping", post(handlers::trigger_scraping));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
