//! Result state machine for the launch list

use launchdeck_core::prelude::*;
use launchdeck_core::LaunchPage;

use crate::request::{RequestId, RequestTracker};

/// What the list area shows.
///
/// `Idle` only exists before the first fetch; afterwards the state cycles
/// between `Loading` and one of the three settled states.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultState {
    #[default]
    Idle,
    Loading,
    Success(LaunchPage),
    Empty,
    /// Backend or transport message, shown verbatim
    Error(String),
}

impl ResultState {
    pub fn name(&self) -> &'static str {
        match self {
            ResultState::Idle => "idle",
            ResultState::Loading => "loading",
            ResultState::Success(_) => "success",
            ResultState::Empty => "empty",
            ResultState::Error(_) => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResultState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            ResultState::Success(_) | ResultState::Empty | ResultState::Error(_)
        )
    }
}

/// Owns the [`ResultState`] and decides which completion may change it.
#[derive(Debug, Default)]
pub struct ResultPresenter {
    state: ResultState,
    requests: RequestTracker,
}

impl ResultPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ResultState {
        &self.state
    }

    pub fn page(&self) -> Option<&LaunchPage> {
        match &self.state {
            ResultState::Success(page) => Some(page),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Enter `Loading` and tag the new fetch.
    ///
    /// Returns `None` while a fetch is already in flight.
    pub fn begin(&mut self) -> Option<RequestId> {
        if self.is_loading() {
            debug!("Fetch rejected: a request is already in flight");
            return None;
        }
        let id = self.requests.issue();
        self.state = ResultState::Loading;
        Some(id)
    }

    /// Apply a completion. Stale completions are dropped.
    ///
    /// Returns true when the state changed.
    pub fn resolve(
        &mut self,
        id: RequestId,
        outcome: std::result::Result<LaunchPage, TransportError>,
    ) -> bool {
        if !self.requests.complete(id) {
            debug!("Dropping stale launch list response {}", id);
            return false;
        }

        self.state = match outcome {
            Ok(page) if page.is_empty() => ResultState::Empty,
            Ok(page) => ResultState::Success(page),
            Err(e) => {
                warn!("Launch list request {} failed: {}", id, e);
                ResultState::Error(e.message)
            }
        };
        true
    }
}
