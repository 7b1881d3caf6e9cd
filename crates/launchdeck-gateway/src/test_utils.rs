//! Test utilities for gateway consumers
//!
//! Provides an in-memory [`FetchGateway`] that filters and windows a fixed
//! set of launches the way the remote service does.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, TimeZone, Utc};

use launchdeck_core::{LaunchId, LaunchPage, LaunchRecord, SearchQuery, TransportError};

use crate::gateway::FetchGateway;

/// Number of launches in [`fixture_launches`].
pub const FIXTURE_COUNT: usize = 109;

/// Creates a test launch with basic defaults and no optional fields.
pub fn test_launch(id: &str, mission: &str) -> LaunchRecord {
    LaunchRecord {
        id: LaunchId::new(id),
        mission_name: mission.to_string(),
        rocket_name: "Falcon 9".to_string(),
        launch_site_name: "CCAFS SLC 40".to_string(),
        launch_date_utc: Utc.with_ymd_and_hms(2020, 10, 24, 15, 31, 0).unwrap(),
        image_url: None,
        description: None,
        article_link: None,
    }
}

/// The most recent fixture launch, with every optional field present.
pub fn sentinel_launch() -> LaunchRecord {
    LaunchRecord {
        id: LaunchId::new("109"),
        mission_name: "Sentinel-6 Michael Freilich".to_string(),
        rocket_name: "Falcon 9".to_string(),
        launch_site_name: "VAFB SLC 4E".to_string(),
        launch_date_utc: Utc.with_ymd_and_hms(2020, 10, 24, 15, 31, 0).unwrap(),
        image_url: Some(
            "https://live.staticflickr.com/65535/50630802488_8cc373728e_o.jpg".to_string(),
        ),
        description: Some(
            "SpaceX will launch Sentinel-6 Michael Freilich into low Earth orbit for NASA, \
             NOAA, ESA, and the European Organization for the Exploitation of Meteorological \
             Satellites aboard a Falcon 9 from SLC-4E, Vandenberg Air Force Station."
                .to_string(),
        ),
        article_link: Some(
            "https://spaceflightnow.com/2020/11/21/international-satellite-launches-to-extend-measurements-of-sea-level-rise/"
                .to_string(),
        ),
    }
}

/// 109 launches, newest first.
///
/// Index 0 is Sentinel-6, index 30 is "Starlink v0.9" and index 50 is
/// "CRS-14", so the first row of each page is predictable for 30 and 50 item
/// pages. Roughly a quarter of the missions are Starlink flights.
pub fn fixture_launches() -> Vec<LaunchRecord> {
    let newest = Utc.with_ymd_and_hms(2020, 10, 24, 15, 31, 0).unwrap();

    (0..FIXTURE_COUNT)
        .map(|index| {
            if index == 0 {
                return sentinel_launch();
            }
            let number = FIXTURE_COUNT - index;
            let mission_name = match index {
                30 => "Starlink v0.9".to_string(),
                50 => "CRS-14".to_string(),
                i if i % 4 == 1 => format!("Starlink-{} (v1.0)", number),
                i if i % 4 == 2 => format!("CRS-{}", number),
                _ => format!("Mission {}", number),
            };
            LaunchRecord {
                id: LaunchId::new(number.to_string()),
                mission_name,
                rocket_name: if index % 7 == 0 {
                    "Falcon Heavy".to_string()
                } else {
                    "Falcon 9".to_string()
                },
                launch_site_name: match index % 3 {
                    0 => "CCAFS SLC 40".to_string(),
                    1 => "KSC LC 39A".to_string(),
                    _ => "VAFB SLC 4E".to_string(),
                },
                launch_date_utc: newest - ChronoDuration::days(index as i64 * 10),
                image_url: (index % 2 == 0)
                    .then(|| format!("https://images.example.com/launch-{}.jpg", number)),
                description: None,
                article_link: None,
            }
        })
        .collect()
}

/// Fixture-backed gateway with failure injection and call counting.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    launches: Vec<LaunchRecord>,
    failure: Mutex<Option<String>>,
    latency: Option<Duration>,
    launch_latency: HashMap<LaunchId, Duration>,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
}

impl InMemoryGateway {
    pub fn new(launches: Vec<LaunchRecord>) -> Self {
        Self {
            launches,
            ..Default::default()
        }
    }

    /// Gateway over [`fixture_launches`].
    pub fn with_fixtures() -> Self {
        Self::new(fixture_launches())
    }

    /// Gateway that always succeeds with zero launches.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Delay every response by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Delay lookups of launch `id` by `latency`, overriding [`Self::with_latency`].
    pub fn with_launch_latency(mut self, id: impl Into<String>, latency: Duration) -> Self {
        self.launch_latency.insert(LaunchId::new(id), latency);
        self
    }

    /// Make every following call fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    /// Stop failing.
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    fn current_failure(&self) -> Option<TransportError> {
        self.failure
            .lock()
            .unwrap()
            .as_ref()
            .map(|message| TransportError::new(message.clone()))
    }

    async fn simulate_latency(&self, launch: Option<&LaunchId>) {
        let latency = launch
            .and_then(|id| self.launch_latency.get(id).copied())
            .or(self.latency);
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }

    /// Filter then window, exactly like the remote service.
    pub fn page_for(&self, query: &SearchQuery) -> LaunchPage {
        let matching: Vec<&LaunchRecord> = self
            .launches
            .iter()
            .filter(|launch| {
                query
                    .filter()
                    .map_or(true, |filter| launch.mission_matches(filter))
            })
            .collect();

        let items = matching
            .iter()
            .skip(query.offset() as usize)
            .take(query.limit().get() as usize)
            .map(|launch| (*launch).clone())
            .collect();

        LaunchPage::new(items, matching.len() as u32)
    }
}

impl FetchGateway for InMemoryGateway {
    async fn list_launches(&self, query: &SearchQuery) -> Result<LaunchPage, TransportError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency(None).await;
        if let Some(err) = self.current_failure() {
            return Err(err);
        }
        Ok(self.page_for(query))
    }

    async fn get_launch(&self, id: &LaunchId) -> Result<Option<LaunchRecord>, TransportError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency(Some(id)).await;
        if let Some(err) = self.current_failure() {
            return Err(err);
        }
        Ok(self.launches.iter().find(|launch| &launch.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdeck_core::PageSize;

    #[test]
    fn test_fixture_anchor_rows() {
        let launches = fixture_launches();
        assert_eq!(launches.len(), FIXTURE_COUNT);
        assert_eq!(launches[0].mission_name, "Sentinel-6 Michael Freilich");
        assert_eq!(launches[30].mission_name, "Starlink v0.9");
        assert_eq!(launches[50].mission_name, "CRS-14");
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let launches = fixture_launches();
        let mut ids: Vec<&str> = launches.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FIXTURE_COUNT);
    }

    #[test]
    fn test_page_size_matches_window_for_every_limit() {
        let gateway = InMemoryGateway::with_fixtures();
        let total = FIXTURE_COUNT as u32;

        for limit in PageSize::ALL {
            let mut offset = 0;
            while offset <= total + limit.get() {
                let page = gateway.page_for(&SearchQuery::new("", offset, limit));
                let expected = limit.get().min(total.saturating_sub(offset));
                assert_eq!(page.items.len() as u32, expected, "offset {offset} limit {limit}");
                assert_eq!(page.total_count, total);
                offset += limit.get();
            }
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_and_applied_before_paging() {
        let gateway = InMemoryGateway::with_fixtures();
        let page = gateway.page_for(&SearchQuery::new("STARLINK", 0, PageSize::Hundred));

        assert!(!page.items.is_empty());
        assert!(page.total_count < FIXTURE_COUNT as u32);
        assert!(page
            .items
            .iter()
            .all(|l| l.mission_name.to_lowercase().contains("starlink")));
    }

    #[tokio::test]
    async fn test_failure_injection_and_recovery() {
        let gateway = InMemoryGateway::with_fixtures();
        gateway.fail_with("Things went wrong doing blah blah blah");

        let err = gateway
            .list_launches(&SearchQuery::new("", 0, PageSize::Thirty))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Things went wrong doing blah blah blah");

        gateway.recover();
        assert!(gateway.get_launch(&LaunchId::new("109")).await.is_ok());
        assert_eq!(gateway.list_calls(), 1);
        assert_eq!(gateway.get_calls(), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let gateway = InMemoryGateway::with_fixtures();
        let launch = gateway.get_launch(&LaunchId::new("234234")).await.unwrap();
        assert!(launch.is_none());
    }
}
