//! Pagination state for the ticket list
//!
//! Holds the current page and the page count derived from the backend total.
//! The controller owning this state is responsible for refetching when the
//! page changes.

/// Page size the ticket list endpoint uses
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: u32,
    page_size: u32,
    total_count: Option<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Start on page 1 with no known total. A zero page size is treated as 1.
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_count: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Move to `page` (1-indexed).
    ///
    /// Returns `true` when the page actually changed, which is the signal to
    /// refetch. Page 0 is ignored. No upper bound is enforced here; callers
    /// pick targets from the rendered page selector.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page == 0 || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Record the total reported by the backend
    pub fn set_total(&mut self, count: u64) {
        self.total_count = Some(count);
    }

    /// Number of pages the selector offers, once a total is known.
    ///
    /// This is `floor(total / page_size)`, not a ceiling: 95 tickets at 10 per
    /// page yields 9 pages and the last 5 tickets have no selector entry.
    pub fn page_count(&self) -> Option<u64> {
        self.total_count
            .map(|total| total / u64::from(self.page_size))
    }

    /// Page numbers the selector offers, `1..=page_count`
    pub fn selectable_pages(&self) -> std::ops::RangeInclusive<u64> {
        1..=self.page_count().unwrap_or(0)
    }
}
