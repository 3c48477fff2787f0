use serde::{Deserialize, Serialize};

/// Rows per page when none (or zero) is configured.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Cursor and totals of a paginator.
///
/// A snapshot can be handed to a client and passed back on the next request to continue
/// from the same page with [`Paginator::resume`](super::Paginator::resume).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    /// Identity value of the first row of the loaded page, 0 before the first load.
    pub first_id: i64,
    /// Identity value of the last row of the loaded page, 0 before the first load.
    pub last_id: i64,
    /// Zero-based index of the loaded page.
    pub page_index: u64,
    /// Rows per page.
    pub page_size: u64,
    /// Page count from the most recent count.
    pub total_pages: u64,
    /// Matching row count from the most recent count.
    pub total_items: u64,
}

impl PageCursor {
    /// True until a page has been loaded.
    pub fn is_unloaded(&self) -> bool {
        self.page_index == 0 && self.first_id == 0 && self.last_id == 0
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            first_id: 0,
            last_id: 0,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
            total_items: 0,
        }
    }
}

/// Number of pages needed for `total_items` rows, `ceil(total_items / page_size)`.
///
/// A zero `page_size` is treated as [`DEFAULT_PAGE_SIZE`].
pub fn page_count(total_items: u64, page_size: u64) -> u64 {
    let page_size = normalize_page_size(page_size);
    total_items.div_ceil(page_size)
}

pub(crate) fn normalize_page_size(page_size: u64) -> u64 {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}
