//! Presentation content derived from controller state
//!
//! Everything a front end needs to draw the list and detail views, with the
//! fixed user-facing strings. Front ends only lay this out.

use serde::Serialize;

use launchdeck_core::{format_detail_date, format_list_date, LaunchRecord, PageSize, Route};

use crate::detail::{DetailResolver, DetailState};
use crate::launches::LaunchListController;
use crate::presenter::ResultState;

pub const IDLE_PROMPT: &str = "Please provide a search option and click in the search button";
pub const NO_RESULTS: &str = "Your search has no results";
pub const NOT_FOUND: &str = "This launch does not exist.";
pub const BACK_LINK_LABEL: &str = "SpaceX Launches";
pub const SEE_MORE_LABEL: &str = "see more...";
pub const LAUNCH_DATE_LABEL: &str = "Launch date:";
pub const ROCKET_NAME_LABEL: &str = "Rocket name:";

/// Column headings of the launch table, in order.
pub const COLUMNS: [&str; 4] = ["Mission", "Rocket", "Launch Site", "Launch Date"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    /// Opens outside the app (system browser)
    pub external: bool,
}

impl Link {
    pub fn internal(label: impl Into<String>, route: &Route) -> Self {
        Self {
            label: label.into(),
            href: route.path(),
            external: false,
        }
    }

    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchRow {
    pub image: Option<Image>,
    pub mission: Link,
    pub rocket: String,
    pub launch_site: String,
    pub launch_date: String,
}

impl LaunchRow {
    pub fn from_record(record: &LaunchRecord) -> Self {
        Self {
            image: record.image_url.as_ref().map(|src| Image {
                src: src.clone(),
                alt: record.mission_name.clone(),
            }),
            mission: Link::internal(&record.mission_name, &Route::Launch(record.id.clone())),
            rocket: record.rocket_name.clone(),
            launch_site: record.launch_site_name.clone(),
            launch_date: format_list_date(&record.launch_date_utc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchTable {
    pub columns: [&'static str; 4],
    pub rows: Vec<LaunchRow>,
    /// e.g. `1-30 of 109`
    pub footer: String,
    pub page_size: PageSize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Content of the list area for each [`ResultState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum ListContent {
    Prompt(&'static str),
    Loading,
    Table(LaunchTable),
    NoResults(&'static str),
    Error(String),
}

impl ListContent {
    pub fn table(&self) -> Option<&LaunchTable> {
        match self {
            ListContent::Table(table) => Some(table),
            _ => None,
        }
    }
}

pub fn list_content(controller: &LaunchListController) -> ListContent {
    match controller.state() {
        ResultState::Idle => ListContent::Prompt(IDLE_PROMPT),
        ResultState::Loading => ListContent::Loading,
        ResultState::Empty => ListContent::NoResults(NO_RESULTS),
        ResultState::Error(message) => ListContent::Error(message.clone()),
        ResultState::Success(page) => {
            let pagination = controller.pagination();
            ListContent::Table(LaunchTable {
                columns: COLUMNS,
                rows: page.items.iter().map(LaunchRow::from_record).collect(),
                footer: pagination.window_label(page.len()),
                page_size: pagination.limit(),
                has_previous: pagination.has_previous(),
                has_next: pagination.has_next(),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchDetail {
    /// `"{mission} at {site}"`
    pub heading: String,
    pub launch_date: String,
    pub rocket_name: String,
    pub image: Option<Image>,
    pub description: Option<String>,
    pub article: Option<Link>,
}

impl LaunchDetail {
    pub fn from_record(record: &LaunchRecord) -> Self {
        Self {
            heading: format!("{} at {}", record.mission_name, record.launch_site_name),
            launch_date: format_detail_date(&record.launch_date_utc),
            rocket_name: record.rocket_name.clone(),
            image: record.image_url.as_ref().map(|src| Image {
                src: src.clone(),
                alt: record.rocket_name.clone(),
            }),
            description: record.description.clone(),
            article: record
                .article_link
                .as_ref()
                .map(|href| Link::external(SEE_MORE_LABEL, href)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum DetailContent {
    Loading,
    Launch(LaunchDetail),
    NotFound(&'static str),
    Error(String),
}

pub fn detail_content(resolver: &DetailResolver) -> DetailContent {
    match resolver.state() {
        DetailState::Loading => DetailContent::Loading,
        DetailState::Found(record) => DetailContent::Launch(LaunchDetail::from_record(record)),
        DetailState::NotFound => DetailContent::NotFound(NOT_FOUND),
        DetailState::Error(message) => DetailContent::Error(message.clone()),
    }
}

/// Link from the detail view back to the list, always shown.
pub fn back_link() -> Link {
    Link::internal(BACK_LINK_LABEL, &Route::Launches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdeck_core::{LaunchId, LaunchPage, TransportError};
    use launchdeck_gateway::test_utils::{sentinel_launch, test_launch};
    use launchdeck_gateway::InMemoryGateway;

    fn loaded(limit: PageSize) -> LaunchListController {
        let mut controller = LaunchListController::new(limit);
        let request = controller.search().unwrap();
        let page = InMemoryGateway::with_fixtures().page_for(&request.query);
        controller.apply(request.request_id, Ok(page));
        controller
    }

    #[test]
    fn test_idle_shows_prompt() {
        let controller = LaunchListController::new(PageSize::Thirty);
        assert_eq!(list_content(&controller), ListContent::Prompt(IDLE_PROMPT));
    }

    #[test]
    fn test_loading_has_no_table() {
        let mut controller = LaunchListController::new(PageSize::Thirty);
        controller.search();
        let content = list_content(&controller);
        assert_eq!(content, ListContent::Loading);
        assert!(content.table().is_none());
    }

    #[test]
    fn test_table_content() {
        let controller = loaded(PageSize::Thirty);
        let content = list_content(&controller);
        let table = content.table().unwrap();

        assert_eq!(table.columns, ["Mission", "Rocket", "Launch Site", "Launch Date"]);
        assert_eq!(table.rows.len(), 30);
        assert_eq!(table.footer, "1-30 of 109");
        assert!(table.has_next);
        assert!(!table.has_previous);

        let first = &table.rows[0];
        assert_eq!(first.mission.label, "Sentinel-6 Michael Freilich");
        assert_eq!(first.mission.href, "/launch/109");
        assert!(!first.mission.external);
        assert_eq!(first.image.as_ref().unwrap().alt, "Sentinel-6 Michael Freilich");
        assert_eq!(first.launch_date, "2020-10-24");
    }

    #[test]
    fn test_row_without_image() {
        let row = LaunchRow::from_record(&test_launch("5", "FalconSat"));
        assert!(row.image.is_none());
        assert_eq!(row.mission.href, "/launch/5");
    }

    #[test]
    fn test_empty_and_error_content() {
        let mut controller = LaunchListController::new(PageSize::Thirty);
        let request = controller.search().unwrap();
        controller.apply(request.request_id, Ok(LaunchPage::default()));
        assert_eq!(list_content(&controller), ListContent::NoResults(NO_RESULTS));

        let request = controller.search().unwrap();
        controller.apply(
            request.request_id,
            Err(TransportError::new("Things went wrong doing blah blah blah")),
        );
        assert_eq!(
            list_content(&controller),
            ListContent::Error("Things went wrong doing blah blah blah".to_string())
        );
    }

    #[test]
    fn test_detail_found() {
        let detail = LaunchDetail::from_record(&sentinel_launch());

        assert_eq!(detail.heading, "Sentinel-6 Michael Freilich at VAFB SLC 4E");
        assert_eq!(detail.launch_date, "10-24-2020 15:31");
        assert_eq!(detail.rocket_name, "Falcon 9");
        assert_eq!(detail.image.unwrap().alt, "Falcon 9");
        assert!(detail.description.is_some());
        let article = detail.article.unwrap();
        assert_eq!(article.label, "see more...");
        assert!(article.external);
    }

    #[test]
    fn test_detail_optional_fields_absent() {
        let detail = LaunchDetail::from_record(&test_launch("5", "FalconSat"));
        assert!(detail.image.is_none());
        assert!(detail.description.is_none());
        assert!(detail.article.is_none());
    }

    #[test]
    fn test_detail_not_found() {
        let mut resolver = DetailResolver::new();
        let id = LaunchId::new("234234");
        let request_id = resolver.resolve(id.clone());
        resolver.apply(request_id, &id, Ok(None));

        assert_eq!(
            detail_content(&resolver),
            DetailContent::NotFound("This launch does not exist.")
        );
    }

    #[test]
    fn test_back_link() {
        let link = back_link();
        assert_eq!(link.label, "SpaceX Launches");
        assert_eq!(link.href, "/");
    }

    #[test]
    fn test_list_content_serializes_with_kind() {
        let controller = LaunchListController::new(PageSize::Thirty);
        let json = serde_json::to_value(list_content(&controller)).unwrap();
        assert_eq!(json["kind"], "prompt");
        assert_eq!(json["content"], IDLE_PROMPT);
    }
}
