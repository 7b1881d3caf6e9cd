//! GraphQL documents and wire types for the SpaceX launch API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use launchdeck_core::{LaunchId, LaunchPage, LaunchRecord, SearchQuery, TransportError};

const LAUNCH_FIELDS: &str = r#"
    id
    mission_name
    launch_date_utc
    details
    launch_site { site_name }
    rocket { rocket_name }
    links { flickr_images article_link }
"#;

/// Query document for one page of past launches.
pub fn launches_document() -> String {
    format!(
        r#"query GetLaunches($limit: Int, $offset: Int, $find: LaunchFind) {{
  launchesPastResult(limit: $limit, offset: $offset, find: $find) {{
    result {{ totalCount }}
    data {{ {LAUNCH_FIELDS} }}
  }}
}}"#
    )
}

/// Query document for a single launch.
pub fn launch_document() -> String {
    format!(
        r#"query GetLaunch($id: ID!) {{
  launch(id: $id) {{ {LAUNCH_FIELDS} }}
}}"#
    )
}

/// Request body posted to the GraphQL endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: Value,
}

impl GraphqlRequest {
    pub fn launches(query: &SearchQuery) -> Self {
        let mut find = Map::new();
        if let Some(filter) = query.filter() {
            find.insert("mission_name".to_string(), Value::from(filter));
        }
        Self {
            query: launches_document(),
            variables: json!({
                "limit": query.limit().get(),
                "offset": query.offset(),
                "find": find,
            }),
        }
    }

    pub fn launch(id: &LaunchId) -> Self {
        Self {
            query: launch_document(),
            variables: json!({ "id": id.as_str() }),
        }
    }
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LaunchesData {
    #[serde(rename = "launchesPastResult")]
    pub launches_past_result: Option<LaunchesPastResult>,
}

#[derive(Debug, Deserialize)]
pub struct LaunchesPastResult {
    pub result: Option<ResultInfo>,
    pub data: Option<Vec<LaunchDto>>,
}

#[derive(Debug, Deserialize)]
pub struct ResultInfo {
    #[serde(rename = "totalCount")]
    pub total_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LaunchData {
    pub launch: Option<LaunchDto>,
}

#[derive(Debug, Deserialize)]
pub struct LaunchDto {
    pub id: String,
    pub mission_name: Option<String>,
    pub launch_date_utc: Option<DateTime<Utc>>,
    pub details: Option<String>,
    pub launch_site: Option<LaunchSiteDto>,
    pub rocket: Option<RocketDto>,
    pub links: Option<LinksDto>,
}

#[derive(Debug, Deserialize)]
pub struct LaunchSiteDto {
    pub site_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RocketDto {
    pub rocket_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LinksDto {
    #[serde(default)]
    pub flickr_images: Option<Vec<String>>,
    pub article_link: Option<String>,
}

impl LaunchDto {
    /// Convert to the domain record.
    ///
    /// Fails when the launch has no date, since every record must carry one.
    /// Missing names become empty strings.
    pub fn into_record(self) -> Result<LaunchRecord, TransportError> {
        let Some(launch_date_utc) = self.launch_date_utc else {
            return Err(TransportError::new(format!(
                "Launch {} is missing its launch date",
                self.id
            )));
        };
        let (image_url, article_link) = match self.links {
            Some(links) => (
                links
                    .flickr_images
                    .and_then(|images| images.into_iter().find(|url| !url.is_empty())),
                links.article_link.filter(|link| !link.is_empty()),
            ),
            None => (None, None),
        };

        Ok(LaunchRecord {
            id: LaunchId::new(self.id),
            mission_name: self.mission_name.unwrap_or_default(),
            rocket_name: self
                .rocket
                .and_then(|r| r.rocket_name)
                .unwrap_or_default(),
            launch_site_name: self
                .launch_site
                .and_then(|s| s.site_name)
                .unwrap_or_default(),
            launch_date_utc,
            image_url,
            description: self.details.filter(|d| !d.trim().is_empty()),
            article_link,
        })
    }
}

impl LaunchesPastResult {
    /// A malformed row fails the whole page; dropping it would leave
    /// `total_count` out of step with the rows.
    pub fn into_page(self) -> Result<LaunchPage, TransportError> {
        let items = self
            .data
            .unwrap_or_default()
            .into_iter()
            .map(LaunchDto::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        let total_count = self
            .result
            .and_then(|r| r.total_count)
            .unwrap_or(items.len() as u32);
        Ok(LaunchPage::new(items, total_count))
    }
}
