//! Book query service.

use std::sync::Arc;

use bson::oid::ObjectId;

use crate::catalog::filter::build_filter;
use crate::catalog::model::{BookDetailResponse, BooksListResponse, PaginationInfo};
use crate::catalog::pagination;
use crate::catalog::query::BookQueryParams;
use crate::error::{AppError, Result};
use crate::store::BookStore;

/// Read-only query service over the processed book collection.
///
/// Stateless apart from the injected store handle; every call is an
/// independent, idempotent read.
#[derive(Clone)]
pub struct BookCatalog {
    store: Arc<dyn BookStore>,
}

impl BookCatalog {
    /// Create a catalog over the given store.
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Fetch one page of books matching the validated parameters.
    ///
    /// Two store round-trips: a bounded fetch for the page and a count
    /// for the pagination metadata. Store faults propagate unmodified.
    pub async fn list(&self, params: &BookQueryParams) -> Result<BooksListResponse> {
        let filter = build_filter(params);
        let sort = params.sort_by.resolve();
        let skip = pagination::offset(params.page, params.limit);

        let records = self.store.find(&filter, sort, skip, params.limit).await?;
        let total = self.store.count(&filter).await?;

        let pagination = PaginationInfo::compute(params.page, params.limit, total);

        Ok(BooksListResponse {
            books: records.into_iter().map(Into::into).collect(),
            pagination,
        })
    }

    /// Look up a single book by its identifier.
    ///
    /// The identifier is validated before any store access: a malformed
    /// id is [`AppError::InvalidId`], a well-formed but absent one is
    /// [`AppError::NotFound`].
    pub async fn get_by_id(&self, id: &str) -> Result<BookDetailResponse> {
        let oid =
            ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))?;

        let book = self
            .store
            .find_one(oid)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        Ok(BookDetailResponse { book: book.into() })
    }
}
