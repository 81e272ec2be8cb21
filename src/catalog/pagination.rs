//! Pagination arithmetic.

use crate::catalog::model::PaginationInfo;

/// Number of records to skip to reach the requested page.
pub fn offset(page: u32, limit: u32) -> u64 {
    (page as u64 - 1) * limit as u64
}

impl PaginationInfo {
    /// Derive pagination metadata from the requested page/limit and the
    /// total matching record count.
    ///
    /// A page beyond the last is not an error; it yields an empty result
    /// set with `has_next = false`.
    pub fn compute(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = total.div_ceil(limit as u64) as u32;
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}
