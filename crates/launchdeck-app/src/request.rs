//! Request tagging for last-request-wins completion handling

use std::fmt;

use serde::Serialize;

/// Tag attached to one fetch issued by a controller.
///
/// Ids are issued in strictly increasing order per tracker, starting at 1.
/// The default id (0) is never issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues request ids and remembers which one is still awaited.
#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
    pending: Option<RequestId>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new id. It supersedes any id still pending.
    pub fn issue(&mut self) -> RequestId {
        self.issued += 1;
        let id = RequestId(self.issued);
        self.pending = Some(id);
        id
    }

    /// Accept a completion.
    ///
    /// Returns true only for the latest issued id, and only once.
    pub fn complete(&mut self, id: RequestId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Forget the pending request so its completion will be dropped.
    pub fn abandon(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<RequestId> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(second > first);
        assert_eq!(first.get(), 1);
        assert_eq!(second.to_string(), "#2");
    }

    #[test]
    fn test_only_latest_completes() {
        let mut tracker = RequestTracker::new();
        let stale = tracker.issue();
        let latest = tracker.issue();

        assert!(!tracker.complete(stale));
        assert!(tracker.is_pending());
        assert!(tracker.complete(latest));
        assert!(!tracker.is_pending());
    }

    #[test]
    fn test_completion_is_accepted_once() {
        let mut tracker = RequestTracker::new();
        let id = tracker.issue();
        assert!(tracker.complete(id));
        assert!(!tracker.complete(id));
    }

    #[test]
    fn test_abandon_drops_pending() {
        let mut tracker = RequestTracker::new();
        let id = tracker.issue();
        tracker.abandon();
        assert_eq!(tracker.pending(), None);
        assert!(!tracker.complete(id));
    }
}
