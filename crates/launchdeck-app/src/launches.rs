//! Launch list controller
//!
//! Composes the filter input, the pagination window and the result state.
//! Every fetch trigger returns the query to run (tagged with its request id)
//! or `None` when the trigger is not allowed right now.

use launchdeck_core::prelude::*;
use launchdeck_core::{LaunchPage, PageSize, SearchQuery};

use crate::pagination::PaginationController;
use crate::presenter::{ResultPresenter, ResultState};
use crate::request::RequestId;
use crate::search::SearchController;

/// A list fetch the caller should perform.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchesRequest {
    pub request_id: RequestId,
    pub query: SearchQuery,
}

#[derive(Debug, Default)]
pub struct LaunchListController {
    search: SearchController,
    pagination: PaginationController,
    presenter: ResultPresenter,
    /// Filter of the last submitted search; paging keeps using it even if the
    /// input has been edited since.
    applied_filter: String,
}

impl LaunchListController {
    pub fn new(limit: PageSize) -> Self {
        Self {
            pagination: PaginationController::new(limit),
            ..Default::default()
        }
    }

    pub fn search_input(&self) -> &SearchController {
        &self.search
    }

    pub fn search_input_mut(&mut self) -> &mut SearchController {
        &mut self.search
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    pub fn state(&self) -> &ResultState {
        self.presenter.state()
    }

    pub fn page(&self) -> Option<&LaunchPage> {
        self.presenter.page()
    }

    pub fn is_loading(&self) -> bool {
        self.presenter.is_loading()
    }

    pub fn applied_filter(&self) -> &str {
        &self.applied_filter
    }

    pub fn has_next(&self) -> bool {
        self.pagination.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.pagination.has_previous()
    }

    /// Search the current filter text from the first page.
    pub fn search(&mut self) -> Option<LaunchesRequest> {
        let request_id = self.presenter.begin()?;
        self.applied_filter = self.search.filter_text().to_string();
        self.pagination.reset();
        Some(self.submit(request_id))
    }

    pub fn next(&mut self) -> Option<LaunchesRequest> {
        if self.is_loading() || !self.pagination.has_next() {
            return None;
        }
        let request_id = self.presenter.begin()?;
        self.pagination.advance();
        Some(self.submit(request_id))
    }

    pub fn previous(&mut self) -> Option<LaunchesRequest> {
        if self.is_loading() || !self.pagination.has_previous() {
            return None;
        }
        let request_id = self.presenter.begin()?;
        self.pagination.retreat();
        Some(self.submit(request_id))
    }

    /// Change the page size and reload the first page of the applied filter.
    ///
    /// Before the first search nothing has been applied yet, so the typed
    /// filter text is submitted.
    pub fn set_limit(&mut self, limit: PageSize) -> Option<LaunchesRequest> {
        let first_search = matches!(self.state(), ResultState::Idle);
        let request_id = self.presenter.begin()?;
        if first_search {
            self.applied_filter = self.search.filter_text().to_string();
        }
        self.pagination.set_limit(limit);
        Some(self.submit(request_id))
    }

    pub fn cycle_limit(&mut self) -> Option<LaunchesRequest> {
        let next = self.pagination.limit().cycle();
        self.set_limit(next)
    }

    /// Apply a list completion. Returns true when it was the awaited one.
    pub fn apply(
        &mut self,
        request_id: RequestId,
        result: std::result::Result<LaunchPage, TransportError>,
    ) -> bool {
        let total = result.as_ref().ok().map(|page| page.total_count);
        if !self.presenter.resolve(request_id, result) {
            return false;
        }
        self.pagination.record_total(total);
        true
    }

    fn submit(&mut self, request_id: RequestId) -> LaunchesRequest {
        // The previous total no longer describes what is on screen.
        self.pagination.record_total(None);
        let query = SearchQuery::new(
            &self.applied_filter,
            self.pagination.offset(),
            self.pagination.limit(),
        );
        debug!("Launch list request {}: {}", request_id, query);
        LaunchesRequest { request_id, query }
    }
}
