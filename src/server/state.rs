//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::BookCatalog;
use crate::config::Config;
use crate::queue::EventQueue;
use crate::store::BookStore;

/// Shared application state.
///
/// Cheap to clone; all request handling is stateless beyond these
/// injected handles.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Book query service.
    pub catalog: BookCatalog,
    /// Scraping event queue.
    pub queue: Arc<dyn EventQueue>,
}

impl AppState {
    /// Create application state over the given store and queue.
    pub fn new(config: Config, store: Arc<dyn BookStore>, queue: Arc<dyn EventQueue>) -> Self {
        Self {
            config: Arc::new(config),
            catalog: BookCatalog::new(store),
            queue,
        }
    }
}
