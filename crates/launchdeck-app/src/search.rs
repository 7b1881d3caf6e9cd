//! Mission-name filter input

use launchdeck_core::{PageSize, SearchQuery};

/// Holds the filter text as the user types it.
///
/// Editing never triggers a fetch; only [`SearchController::search`] builds a
/// query.
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    filter_text: String,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter_text: impl Into<String>) -> Self {
        Self {
            filter_text: filter_text.into(),
        }
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.filter_text.push(c);
    }

    pub fn backspace(&mut self) {
        self.filter_text.pop();
    }

    pub fn clear(&mut self) {
        self.filter_text.clear();
    }

    /// Query for the first page of the current filter.
    pub fn search(&self, limit: PageSize) -> SearchQuery {
        SearchQuery::new(&self.filter_text, 0, limit)
    }
}
