//! Book catalog core.
//!
//! Everything between the HTTP boundary and the record store: query
//! parameter validation, the store-agnostic filter predicate, sort
//! resolution, pagination arithmetic and the orchestrating service.

mod filter;
mod model;
mod pagination;
mod query;
mod service;

pub use filter::{CURRENCY_AMOUNT_PATTERN, Field, Filter, build_filter, contains_currency_amount};
pub use model::{
    BookDetailResponse, BookResponse, BooksListResponse, PaginationInfo, ProcessedBook,
};
pub use pagination::offset;
pub use query::{BookQueryParams, RawBookQuery, SortKey, SortOrder};
pub use service::BookCatalog;
