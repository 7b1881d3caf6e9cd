//! Single launch lookup for the detail view

use launchdeck_core::prelude::*;
use launchdeck_core::{LaunchId, LaunchRecord};

use crate::request::{RequestId, RequestTracker};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Loading,
    Found(LaunchRecord),
    NotFound,
    /// Backend or transport message, shown verbatim
    Error(String),
}

impl DetailState {
    pub fn name(&self) -> &'static str {
        match self {
            DetailState::Loading => "loading",
            DetailState::Found(_) => "found",
            DetailState::NotFound => "not_found",
            DetailState::Error(_) => "error",
        }
    }
}

/// Resolves a launch id into a [`DetailState`].
///
/// One resolver lives for the whole session and is re-targeted on every
/// navigation, so request ids keep increasing across detail views.
#[derive(Debug, Default)]
pub struct DetailResolver {
    launch_id: Option<LaunchId>,
    state: DetailState,
    requests: RequestTracker,
}

impl DetailResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn launch_id(&self) -> Option<&LaunchId> {
        self.launch_id.as_ref()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn record(&self) -> Option<&LaunchRecord> {
        match &self.state {
            DetailState::Found(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.requests.is_pending()
    }

    /// Start looking up `id`. Any lookup still in flight is superseded.
    pub fn resolve(&mut self, id: LaunchId) -> RequestId {
        let request_id = self.requests.issue();
        debug!("Launch detail request {}: {}", request_id, id);
        self.launch_id = Some(id);
        self.state = DetailState::Loading;
        request_id
    }

    /// Look up the current id again after a failure.
    pub fn retry(&mut self) -> Option<(RequestId, LaunchId)> {
        if self.is_loading() || !matches!(self.state, DetailState::Error(_)) {
            return None;
        }
        let id = self.launch_id.clone()?;
        Some((self.resolve(id.clone()), id))
    }

    /// Drop the current target; a late completion will be ignored.
    pub fn clear(&mut self) {
        self.requests.abandon();
        self.launch_id = None;
        self.state = DetailState::Loading;
    }

    /// Apply a completion for `id`. Returns true when it was the awaited one.
    pub fn apply(
        &mut self,
        request_id: RequestId,
        id: &LaunchId,
        result: std::result::Result<Option<LaunchRecord>, TransportError>,
    ) -> bool {
        if self.launch_id.as_ref() != Some(id) || !self.requests.complete(request_id) {
            debug!("Dropping stale launch detail response {} for {}", request_id, id);
            return false;
        }

        self.state = match result {
            Ok(Some(record)) => DetailState::Found(record),
            Ok(None) => {
                info!("Launch {} does not exist", id);
                DetailState::NotFound
            }
            Err(e) => {
                warn!("Launch detail request {} failed: {}", request_id, e);
                DetailState::Error(e.message)
            }
        };
        true
    }
}
