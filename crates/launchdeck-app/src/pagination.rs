//! Offset/limit window over the launch catalog

use launchdeck_core::PageSize;

/// Tracks the current window and the total match count of the last page.
#[derive(Debug, Clone, Default)]
pub struct PaginationController {
    limit: PageSize,
    offset: u32,
    /// `None` while nothing has been fetched, a fetch is in flight, or the
    /// last fetch failed.
    total_count: Option<u32>,
}

impl PaginationController {
    pub fn new(limit: PageSize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    pub fn limit(&self) -> PageSize {
        self.limit
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Total matches of the last page; 0 when no page is known.
    pub fn total_count(&self) -> u32 {
        self.total_count.unwrap_or(0)
    }

    pub fn has_next(&self) -> bool {
        self.offset + self.limit.get() < self.total_count()
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// Change the page size and go back to the first page.
    pub fn set_limit(&mut self, limit: PageSize) {
        self.limit = limit;
        self.offset = 0;
    }

    /// Move one page forward. Returns false when there is no next page.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.offset += self.limit.get();
        true
    }

    /// Move one page back, never below 0. Returns false on the first page.
    pub fn retreat(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.offset = self.offset.saturating_sub(self.limit.get());
        true
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Remember the total of the page just received, or forget it.
    pub fn record_total(&mut self, total_count: Option<u32>) {
        self.total_count = total_count;
    }

    /// Footer text for a page of `items` rows, e.g. `31-60 of 109`.
    pub fn window_label(&self, items: usize) -> String {
        format!(
            "{}-{} of {}",
            self.offset + 1,
            self.offset as usize + items,
            self.total_count()
        )
    }
}
