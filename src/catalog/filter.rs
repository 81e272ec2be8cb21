//! Store-agnostic filter predicate.
//!
//! The query builder maps validated parameters into a [`Filter`] tree;
//! each store backend translates the tree into its own query language
//! ([`crate::store::MongoStore`]) or evaluates it directly
//! ([`crate::store::MemoryStore`]). Filter semantics live here, store
//! syntax lives in the adapters.

use crate::catalog::model::ProcessedBook;
use crate::catalog::query::BookQueryParams;

/// Regex matching a currency-prefixed numeric amount, e.g. `£51.77`.
///
/// Scraped price fields are free text; this is the pattern the store-side
/// presence check uses.
pub const CURRENCY_AMOUNT_PATTERN: &str = r"£(\d+\.?\d*)";

/// Stored fields the catalog filters or sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `product_type` — category text.
    ProductType,
    /// `price_excl_tax` — textual ex-tax price.
    PriceExclTax,
    /// `price_incl_tax` — textual inc-tax price.
    PriceInclTax,
    /// `price_color` — textual listing price.
    PriceColor,
    /// `star_count` — integer rating.
    StarCount,
    /// `number_of_reviews` — textual review count.
    NumberOfReviews,
    /// `created_at` — record creation time.
    CreatedAt,
}

impl Field {
    /// Name of the field as stored.
    pub fn name(&self) -> &'static str {
        match self {
            Field::ProductType => "product_type",
            Field::PriceExclTax => "price_excl_tax",
            Field::PriceInclTax => "price_incl_tax",
            Field::PriceColor => "price_color",
            Field::StarCount => "star_count",
            Field::NumberOfReviews => "number_of_reviews",
            Field::CreatedAt => "created_at",
        }
    }

    /// Textual value of this field on a record, where the field is text.
    pub fn text_of<'a>(&self, book: &'a ProcessedBook) -> Option<&'a str> {
        match self {
            Field::ProductType => book.product_type.as_deref(),
            Field::PriceExclTax => book.price_excl_tax.as_deref(),
            Field::PriceInclTax => book.price_incl_tax.as_deref(),
            Field::PriceColor => book.price_color.as_deref(),
            Field::NumberOfReviews => book.number_of_reviews.as_deref(),
            Field::StarCount | Field::CreatedAt => None,
        }
    }
}

/// A filter predicate over book records.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every record.
    All,
    /// Case-insensitive substring match on a text field.
    Contains {
        /// Field to search.
        field: Field,
        /// Substring to look for.
        needle: String,
    },
    /// Exact match on the star-count field.
    StarCount(i32),
    /// The field contains a currency-prefixed numeric amount.
    HasPriceAmount(Field),
    /// Every sub-filter matches.
    AllOf(Vec<Filter>),
    /// At least one sub-filter matches.
    AnyOf(Vec<Filter>),
}

impl Filter {
    /// Evaluate this filter against a record in process.
    ///
    /// This is the reference semantics; the MongoDB translation in the
    /// store adapter must agree with it.
    pub fn matches(&self, book: &ProcessedBook) -> bool {
        match self {
            Filter::All => true,
            Filter::Contains { field, needle } => field
                .text_of(book)
                .is_some_and(|text| text.to_lowercase().contains(&needle.to_lowercase())),
            Filter::StarCount(n) => book.star_count == *n,
            Filter::HasPriceAmount(field) => {
                field.text_of(book).is_some_and(contains_currency_amount)
            }
            Filter::AllOf(filters) => filters.iter().all(|f| f.matches(book)),
            Filter::AnyOf(filters) => filters.iter().any(|f| f.matches(book)),
        }
    }
}

/// Whether the text contains a currency-prefixed numeric amount.
pub fn contains_currency_amount(text: &str) -> bool {
    let mut rest = text;
    while let Some(pos) = rest.find('£') {
        let after = &rest[pos + '£'.len_utf8()..];
        if after.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return true;
        }
        rest = after;
    }
    false
}

/// Build the filter predicate for validated query parameters.
///
/// Filters combine conjunctively, except the three price-field checks
/// which combine disjunctively among themselves. A price bound only
/// requires an amount to be *present* in one of the price fields; the
/// bound values are not compared numerically (the stored prices are free
/// text — see DESIGN.md).
pub fn build_filter(params: &BookQueryParams) -> Filter {
    let mut filters = Vec::new();

    if let Some(category) = &params.category {
        filters.push(Filter::Contains {
            field: Field::ProductType,
            needle: category.clone(),
        });
    }

    if params.min_price.is_some() || params.max_price.is_some() {
        filters.push(Filter::AnyOf(vec![
            Filter::HasPriceAmount(Field::PriceExclTax),
            Filter::HasPriceAmount(Field::PriceInclTax),
            Filter::HasPriceAmount(Field::PriceColor),
        ]));
    }

    if let Some(rating) = params.rating {
        filters.push(Filter::StarCount(rating));
    }

    match filters.len() {
        0 => Filter::All,
        1 => filters.remove(0),
        _ => Filter::AllOf(filters),
    }
}
