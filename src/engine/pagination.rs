// src/engine/pagination.rs

use super::QueryError;

/// Validates a 1-based page number coming from the query string.
pub fn page_number(page: Option<i64>) -> Result<usize, QueryError> {
    match page {
        None => Ok(1),
        Some(p) if p >= 1 => usize::try_from(p)
            .map_err(|_| QueryError::InvalidInput(format!("page {} is out of range", p))),
        Some(p) => Err(QueryError::InvalidInput(format!(
            "page must be 1 or greater, got {}",
            p
        ))),
    }
}

/// Returns the window `items[(page-1)*page_size .. page*page_size]`.
///
/// A window that starts past the end of `items` is empty, not an error.
/// `page` and `page_size` must both be at least 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    debug_assert!(page >= 1 && page_size >= 1);

    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of non-empty pages needed to show `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Page 1 is always addressable (it may be empty); later pages only while
/// they still hold at least one item.
pub fn ensure_page_in_range(total: usize, page: usize, page_size: usize) -> Result<(), QueryError> {
    if page > 1 && page > page_count(total, page_size) {
        return Err(QueryError::NotFound);
    }
    Ok(())
}
