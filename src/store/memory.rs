//! In-memory store backend.
//!
//! Evaluates filter predicates directly against a vector of records.
//! Used by the test suite and handy for local development without a
//! MongoDB instance; it must order and match records exactly the way the
//! MongoDB adapter does.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use parking_lot::RwLock;

use crate::catalog::{Field, Filter, ProcessedBook, SortOrder};
use crate::error::Result;
use crate::store::BookStore;

/// In-memory record store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    books: Arc<RwLock<Vec<ProcessedBook>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record.
    pub fn insert(&self, book: ProcessedBook) {
        self.books.write().push(book);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.books.read().is_empty()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn find(
        &self,
        filter: &Filter,
        sort: (Field, SortOrder),
        skip: u64,
        limit: u32,
    ) -> Result<Vec<ProcessedBook>> {
        let mut matched: Vec<ProcessedBook> = self
            .books
            .read()
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect();

        let (field, order) = sort;
        match order {
            // sort_by is stable, so records comparing equal keep insertion
            // order across repeated queries.
            SortOrder::Descending => matched.sort_by(|a, b| compare(b, a, field)),
        }

        Ok(matched
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: &Filter) -> Result<u64> {
        let count = self
            .books
            .read()
            .iter()
            .filter(|book| filter.matches(book))
            .count();
        Ok(count as u64)
    }

    async fn find_one(&self, id: ObjectId) -> Result<Option<ProcessedBook>> {
        Ok(self.books.read().iter().find(|b| b.id == id).cloned())
    }
}

/// Compare two records on a sort field.
///
/// Textual fields (prices, review counts) compare lexicographically,
/// matching how MongoDB orders string values; absent values sort below
/// present ones.
fn compare(a: &ProcessedBook, b: &ProcessedBook, field: Field) -> Ordering {
    match field {
        Field::StarCount => a.star_count.cmp(&b.star_count),
        Field::CreatedAt => a.created_at.cmp(&b.created_at),
        _ => field.text_of(a).cmp(&field.text_of(b)),
    }
}
