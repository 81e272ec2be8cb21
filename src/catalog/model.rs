//! Book record and response models.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A processed book record as stored by the ingestion pipeline.
///
/// This service only ever reads these; the scraping worker writes them.
/// The price fields are free-text strings scraped off the page and may
/// embed a currency-prefixed amount such as `£51.77`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedBook {
    /// Record identifier.
    #[serde(rename = "_id")]
    pub id: ObjectId,

    /// Scraping job that produced this record.
    pub sync_job_id: ObjectId,

    /// Raw scrape the record was processed from.
    pub raw_data_id: ObjectId,

    /// Book title.
    pub title: String,

    /// Cover image URL.
    pub image_url: String,

    /// Price excluding tax, as scraped.
    pub price_excl_tax: Option<String>,

    /// Price including tax, as scraped.
    pub price_incl_tax: Option<String>,

    /// Stock status text.
    pub stock_status: String,

    /// Star rating (0-5).
    #[serde(default)]
    pub star_count: i32,

    /// Book description.
    pub description: Option<String>,

    /// Product type / category.
    pub product_type: Option<String>,

    /// Availability text.
    pub availability: Option<String>,

    /// Universal product code.
    pub upc: Option<String>,

    /// Tax amount, as scraped.
    pub tax: Option<String>,

    /// Review count, as scraped (free text).
    pub number_of_reviews: Option<String>,

    /// Price as shown in the listing colour band, as scraped.
    pub price_color: Option<String>,

    /// When the record was created.
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Book projection returned over the wire.
///
/// Field names are the response contract; the identifier is serialized
/// under the `_id` key as a hex string. Ingestion lineage fields are not
/// part of the projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    /// Record identifier (hex).
    #[serde(rename = "_id")]
    pub id: String,
    /// Book title.
    pub title: String,
    /// Cover image URL.
    pub image_url: String,
    /// Price excluding tax.
    pub price_excl_tax: Option<String>,
    /// Price including tax.
    pub price_incl_tax: Option<String>,
    /// Stock status text.
    pub stock_status: String,
    /// Star rating (0-5).
    pub star_count: i32,
    /// Book description.
    pub description: Option<String>,
    /// Product type / category.
    pub product_type: Option<String>,
    /// Availability text.
    pub availability: Option<String>,
    /// Universal product code.
    pub upc: Option<String>,
    /// Tax amount.
    pub tax: Option<String>,
    /// Review count.
    pub number_of_reviews: Option<String>,
    /// Listing colour band price.
    pub price_color: Option<String>,
    /// Record creation time (RFC 3339).
    pub created_at: DateTime<Utc>,
}

impl From<ProcessedBook> for BookResponse {
    fn from(book: ProcessedBook) -> Self {
        Self {
            id: book.id.to_hex(),
            title: book.title,
            image_url: book.image_url,
            price_excl_tax: book.price_excl_tax,
            price_incl_tax: book.price_incl_tax,
            stock_status: book.stock_status,
            star_count: book.star_count,
            description: book.description,
            product_type: book.product_type,
            availability: book.availability,
            upc: book.upc,
            tax: book.tax,
            number_of_reviews: book.number_of_reviews,
            price_color: book.price_color,
            created_at: book.created_at,
        }
    }
}

/// Pagination metadata for a list response. Derived per request, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Requested page (1-based).
    pub page: u32,
    /// Requested page size.
    pub limit: u32,
    /// Total records matching the filter.
    pub total: u64,
    /// Total pages at this limit.
    pub total_pages: u32,
    /// Whether a later page exists.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_prev: bool,
}

/// One page of books plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooksListResponse {
    /// Books on this page, in store order.
    pub books: Vec<BookResponse>,
    /// Pagination metadata.
    pub pagination: PaginationInfo,
}

/// A single book lookup result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDetailResponse {
    /// The requested book.
    pub book: BookResponse,
}
