//! Headless mode - JSON event output for scripting
//!
//! Runs a single list query (or detail lookup) and writes every engine event
//! to stdout as NDJSON, one event per line:
//!
//! ```json
//! {"event":"list_state_changed","state":"loading","offset":0,"limit":30,"total_count":0,"content":{"kind":"loading"},"timestamp":1704700001000}
//! {"event":"list_state_changed","state":"success","offset":0,"limit":30,"total_count":109,"content":{"kind":"table","content":{...}},"timestamp":1704700002000}
//! {"event":"shutdown","timestamp":1704700002001}
//! ```

mod runner;

pub use runner::{run_headless, HeadlessOptions};

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use launchdeck_app::EngineEvent;

/// An engine event stamped with the time it was written
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessEvent {
    #[serde(flatten)]
    event: EngineEvent,
    timestamp: i64,
}

impl HeadlessEvent {
    pub fn new(event: EngineEvent) -> Self {
        Self {
            event,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Write this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tag_and_timestamp_share_one_object() {
        let event = HeadlessEvent::new(EngineEvent::RouteChanged {
            route: "/launch/109".to_string(),
        });
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "route_changed");
        assert_eq!(json["route"], "/launch/109");
        assert!(json["timestamp"].as_i64().unwrap() > 0);
    }
}
