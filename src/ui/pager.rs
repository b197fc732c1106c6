//! Client-side pagination over the cached list.
//!
//! Pages are a pure slice of whatever the state container holds; moving
//! between pages never refetches.

pub const USERS_PER_PAGE: usize = 5;

/// Number of page slots to render: `ceil(len / page size)`, 0 when empty.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(USERS_PER_PAGE)
}

/// Clamp a 0-based page index into range for a list of `len` items.
///
/// An empty list pins the page to 0; a shrinking list pulls an
/// out-of-range page back to the last one.
pub fn clamp_page(page: usize, len: usize) -> usize {
    let pages = page_count(len);
    if pages == 0 {
        0
    } else {
        page.min(pages - 1)
    }
}

/// The items visible on a 0-based page.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_mul(USERS_PER_PAGE).min(items.len());
    let end = (start + USERS_PER_PAGE).min(items.len());
    &items[start..end]
}
