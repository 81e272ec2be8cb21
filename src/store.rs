//! Record store backends.
//!
//! The catalog talks to storage through the [`BookStore`] trait so that
//! the production MongoDB adapter and the in-memory backend used by tests
//! are interchangeable. Filter semantics are defined by
//! [`crate::catalog::Filter`]; adapters only translate or evaluate them.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::catalog::{Field, Filter, ProcessedBook, SortOrder};
use crate::error::Result;

/// Read-only access to the processed book collection.
///
/// Implementations must be safe for concurrent use by multiple in-flight
/// requests; the catalog shares one handle across all of them.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Fetch one bounded, ordered page of records matching the filter.
    async fn find(
        &self,
        filter: &Filter,
        sort: (Field, SortOrder),
        skip: u64,
        limit: u32,
    ) -> Result<Vec<ProcessedBook>>;

    /// Count all records matching the filter.
    async fn count(&self, filter: &Filter) -> Result<u64>;

    /// Look up a single record by id.
    async fn find_one(&self, id: ObjectId) -> Result<Option<ProcessedBook>>;
}
