//! Launch catalog domain types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a launch record as issued by the data service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaunchId(String);

impl LaunchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaunchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LaunchId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LaunchId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One historical rocket launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub id: LaunchId,
    pub mission_name: String,
    pub rocket_name: String,
    pub launch_site_name: String,
    pub launch_date_utc: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_link: Option<String>,
}

impl LaunchRecord {
    /// Case-insensitive substring match on the mission name.
    ///
    /// Mirrors the filter the data service applies before pagination.
    pub fn mission_matches(&self, filter: &str) -> bool {
        self.mission_name
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}

/// One window of launches plus the total number of matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchPage {
    pub items: Vec<LaunchRecord>,
    pub total_count: u32,
}

impl LaunchPage {
    pub fn new(items: Vec<LaunchRecord>, total_count: u32) -> Self {
        Self { items, total_count }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
