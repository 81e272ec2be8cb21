//! Query parameter validation and sort resolution.

use serde::Deserialize;

use crate::catalog::filter::Field;
use crate::error::{AppError, Result};

/// Page size ceiling; requests above this are rejected, not clamped.
pub const MAX_LIMIT: u32 = 100;

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 10;

/// Raw, unvalidated query parameters as they arrive at the boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBookQuery {
    /// Requested page (1-based).
    pub page: Option<i64>,
    /// Requested page size.
    pub limit: Option<i64>,
    /// Category substring to filter on.
    pub category: Option<String>,
    /// Minimum price bound.
    pub min_price: Option<f64>,
    /// Maximum price bound.
    pub max_price: Option<f64>,
    /// Exact star rating to filter on.
    pub rating: Option<i64>,
    /// Sort key name.
    pub sort_by: Option<String>,
}

/// Validated book query parameters.
///
/// Invariant: every field has been bounds-checked; downstream components
/// (filter builder, sort resolver, store adapters) assume valid input and
/// have no error paths of their own for these values.
#[derive(Debug, Clone, PartialEq)]
pub struct BookQueryParams {
    /// Page to fetch (>= 1).
    pub page: u32,
    /// Page size (1..=100).
    pub limit: u32,
    /// Category substring filter.
    pub category: Option<String>,
    /// Minimum price bound (>= 0, finite).
    pub min_price: Option<f64>,
    /// Maximum price bound (>= 0, finite).
    pub max_price: Option<f64>,
    /// Exact star rating filter (0..=5).
    pub rating: Option<i32>,
    /// Sort key.
    pub sort_by: SortKey,
}

impl Default for BookQueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            category: None,
            min_price: None,
            max_price: None,
            rating: None,
            sort_by: SortKey::CreatedAt,
        }
    }
}

impl BookQueryParams {
    /// Validate raw parameters, applying defaults for absent ones.
    ///
    /// Fails with [`AppError::InvalidParameter`] naming the offending
    /// field. Values are never silently clamped.
    pub fn from_raw(raw: RawBookQuery) -> Result<Self> {
        let page = match raw.page {
            None => 1,
            Some(p) if p >= 1 => p as u32,
            Some(p) => return Err(invalid("page", format!("must be >= 1, got {}", p))),
        };

        let limit = match raw.limit {
            None => DEFAULT_LIMIT,
            Some(l) if (1..=MAX_LIMIT as i64).contains(&l) => l as u32,
            Some(l) => {
                return Err(invalid(
                    "limit",
                    format!("must be between 1 and {}, got {}", MAX_LIMIT, l),
                ));
            }
        };

        let min_price = validate_price("min_price", raw.min_price)?;
        let max_price = validate_price("max_price", raw.max_price)?;

        let rating = match raw.rating {
            None => None,
            Some(r) if (0..=5).contains(&r) => Some(r as i32),
            Some(r) => {
                return Err(invalid(
                    "rating",
                    format!("must be between 0 and 5, got {}", r),
                ));
            }
        };

        let sort_by = match raw.sort_by.as_deref() {
            None => SortKey::CreatedAt,
            Some(s) => SortKey::from_name(s)
                .ok_or_else(|| invalid("sort_by", format!("unrecognized sort key '{}'", s)))?,
        };

        Ok(Self {
            page,
            limit,
            category: raw.category,
            min_price,
            max_price,
            rating,
            sort_by,
        })
    }
}

fn validate_price(field: &'static str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        None => Ok(None),
        Some(p) if p.is_finite() && p >= 0.0 => Ok(Some(p)),
        Some(p) => Err(invalid(field, format!("must be a non-negative number, got {}", p))),
    }
}

fn invalid(field: &'static str, reason: String) -> AppError {
    AppError::InvalidParameter { field, reason }
}

/// Recognized sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Sort by star rating.
    Rating,
    /// Sort by the textual ex-tax price.
    Price,
    /// Sort by the textual review count.
    Reviews,
    /// Sort by record creation time (the default).
    #[default]
    CreatedAt,
}

impl SortKey {
    /// Parse a sort key from its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rating" => Some(SortKey::Rating),
            "price" => Some(SortKey::Price),
            "reviews" => Some(SortKey::Reviews),
            "created_at" => Some(SortKey::CreatedAt),
            _ => None,
        }
    }

    /// Wire name of this sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Price => "price",
            SortKey::Reviews => "reviews",
            SortKey::CreatedAt => "created_at",
        }
    }

    /// Resolve to a concrete stored field and direction.
    ///
    /// Every catalog ordering is descending; the validator guarantees the
    /// key is recognized, so there is no error path here.
    pub fn resolve(self) -> (Field, SortOrder) {
        let field = match self {
            SortKey::Rating => Field::StarCount,
            SortKey::Price => Field::PriceExclTax,
            SortKey::Reviews => Field::NumberOfReviews,
            SortKey::CreatedAt => Field::CreatedAt,
        };
        (field, SortOrder::Descending)
    }
}

/// Sort direction. The catalog only serves descending orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Highest or newest value first.
    Descending,
}
