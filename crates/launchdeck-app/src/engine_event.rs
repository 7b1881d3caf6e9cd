//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. Headless mode prints them as JSON lines.

use serde::Serialize;

use launchdeck_core::{LaunchId, PageSize};

use crate::view_model::{DetailContent, ListContent};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// The user moved to another view
    RouteChanged { route: String },

    /// The launch list result state changed
    ListStateChanged {
        state: &'static str,
        offset: u32,
        limit: PageSize,
        total_count: u32,
        content: ListContent,
    },

    /// The detail view state changed
    DetailStateChanged {
        id: Option<LaunchId>,
        state: &'static str,
        content: DetailContent,
    },

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::RouteChanged { .. } => "route_changed",
            EngineEvent::ListStateChanged { .. } => "list_state_changed",
            EngineEvent::DetailStateChanged { .. } => "detail_state_changed",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_event_tag() {
        let event = EngineEvent::RouteChanged {
            route: "/launch/109".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "route_changed");
        assert_eq!(json["route"], "/launch/109");
        assert_eq!(event.event_type(), "route_changed");
    }

    #[test]
    fn test_shutdown_serializes() {
        let json = serde_json::to_string(&EngineEvent::Shutdown).unwrap();
        assert_eq!(json, r#"{"event":"shutdown"}"#);
    }
}
