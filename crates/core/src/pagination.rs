//! Page number to storage offset conversion.

use crate::coercion::LooseInt;

/// Page size used when configuration does not provide one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Storage offset for a zero-based page number.
///
/// Negative pages are treated as page 0.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    page.max(0).saturating_mul(page_size)
}

/// Resolve a `?page=` query value. Missing or unparseable pages are page 0.
pub fn requested_page(page: Option<&LooseInt>) -> i64 {
    page.map_or(0, LooseInt::coerce).max(0)
}
