//! HTTP request handlers.
//!
//! Handlers are thin: they validate at the boundary, delegate to the
//! catalog service or the queue, and let [`crate::error::AppError`] map
//! failure kinds to status codes.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::catalog::{BookDetailResponse, BookQueryParams, BooksListResponse, RawBookQuery};
use crate::error::Result;
use crate::queue::ScrapeEvent;
use crate::server::AppState;

/// Service banner.
pub async fn index(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "message": state.config.server.title,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// List books with filtering, sorting and pagination.
pub async fn list_books(
    State(state): State<AppState>,
    Query(raw): Query<RawBookQuery>,
) -> Result<Json<BooksListResponse>> {
    let params = BookQueryParams::from_raw(raw)?;
    Ok(Json(state.catalog.list(&params).await?))
}

/// Single book lookup by id.
pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookDetailResponse>> {
    Ok(Json(state.catalog.get_by_id(&id).await?))
}

/// Request body for the scraping trigger.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapingTriggerRequest {
    /// Start URL for the scrape (worker default when absent).
    #[serde(default)]
    pub url: Option<String>,
    /// Job priority.
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    1
}

/// Response body for the scraping trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapingTriggerResponse {
    /// Whether the event was enqueued.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Identifier of the enqueued event.
    pub event_id: String,
}

/// Enqueue a scraping job for the external worker.
pub async fn trigger_scraping(
    State(state): State<AppState>,
    Json(request): Json<ScrapingTriggerRequest>,
) -> Result<Json<ScrapingTriggerResponse>> {
    let event = ScrapeEvent::start_scraping(request.url, request.priority);
    state.queue.publish(&event).await?;

    tracing::info!(event_id = %event.event_id, "Scraping event enqueued");

    Ok(Json(ScrapingTriggerResponse {
        success: true,
        message: "Scraping event triggered successfully".to_string(),
        event_id: event.event_id,
    }))
}
