//! bookscrape-rs: a read API over a catalog of scraped book records.
//!
//! This crate serves the processed output of a book-scraping pipeline:
//! a MongoDB collection of book records that can be filtered, sorted and
//! paginated over HTTP, plus a trigger endpoint that enqueues a scraping
//! job on RabbitMQ for the (external) worker to pick up.
//!
//! # Features
//!
//! - Filtering by category, price presence and star rating
//! - Descending sort by rating, price, review count or creation date
//! - Page/limit pagination with total counts
//! - Single-record lookup by ObjectId
//! - Fire-and-forget scraping trigger over AMQP
//! - In-memory store backend for tests and local development
//!
//! The HTTP surface lives under `/api/v1` and is stateless; the store and
//! queue clients are connected once at startup and shared across requests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Book catalog core: models, query validation, filtering, pagination.
pub mod catalog;
/// Configuration and CLI.
pub mod config;
/// Error types.
pub mod error;
/// Scraping event queue.
pub mod queue;
/// HTTP server.
pub mod server;
/// Record store backends.
pub mod store;


pub use catalog::BookCatalog;
pub use config::{Cli, Command, Config};
pub use error::{AppError, Result};
pub use server::AppState;
pub use store::{BookStore, MemoryStore, MongoStore};
