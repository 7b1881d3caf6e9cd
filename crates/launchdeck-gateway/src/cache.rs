//! Short-lived response cache in front of another gateway
//!
//! The first request for a query always goes to the network. An identical
//! request within the TTL is answered from memory. Failures are never cached,
//! and a TTL of zero turns the cache off entirely.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

use launchdeck_core::{LaunchId, LaunchPage, LaunchRecord, SearchQuery, TransportError};

use crate::gateway::FetchGateway;

struct Entry<V> {
    stored_at: Instant,
    value: V,
}

struct TtlMap<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K: Eq + Hash, V: Clone> TtlMap<K, V> {
    fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Entry<V>>> {
        // A panic while holding the lock leaves only a stale map behind.
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store `value` and drop every entry that has outlived the TTL.
    fn insert(&self, key: K, value: V) {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        if entries.len() < before {
            trace!("Pruned {} expired cache entries", before - entries.len());
        }
        entries.insert(
            key,
            Entry {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

/// Caching decorator for any [`FetchGateway`].
pub struct CachedGateway<G> {
    inner: G,
    ttl: Duration,
    pages: TtlMap<SearchQuery, LaunchPage>,
    launches: TtlMap<LaunchId, Option<LaunchRecord>>,
}

impl<G> CachedGateway<G> {
    pub fn new(inner: G, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            pages: TtlMap::new(ttl),
            launches: TtlMap::new(ttl),
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Number of cached entries (pages + single launches).
    pub fn cached_entries(&self) -> usize {
        self.pages.len() + self.launches.len()
    }
}

impl<G: FetchGateway + Sync> FetchGateway for CachedGateway<G> {
    async fn list_launches(&self, query: &SearchQuery) -> Result<LaunchPage, TransportError> {
        if self.is_enabled() {
            if let Some(page) = self.pages.get(query) {
                trace!("Cache hit for {}", query);
                return Ok(page);
            }
        }

        let page = self.inner.list_launches(query).await?;
        if self.is_enabled() {
            self.pages.insert(query.clone(), page.clone());
        }
        Ok(page)
    }

    async fn get_launch(&self, id: &LaunchId) -> Result<Option<LaunchRecord>, TransportError> {
        if self.is_enabled() {
            if let Some(launch) = self.launches.get(id) {
                trace!("Cache hit for launch {}", id);
                return Ok(launch);
            }
        }

        let launch = self.inner.get_launch(id).await?;
        if self.is_enabled() {
            self.launches.insert(id.clone(), launch.clone());
        }
        Ok(launch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::InMemoryGateway;
    use launchdeck_core::PageSize;

    fn query() -> SearchQuery {
        SearchQuery::new("", 0, PageSize::Thirty)
    }

    #[tokio::test]
    async fn test_identical_query_within_ttl_is_served_from_cache() {
        let gateway = CachedGateway::new(InMemoryGateway::with_fixtures(), Duration::from_secs(30));

        let first = gateway.list_launches(&query()).await.unwrap();
        let second = gateway.list_launches(&query()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(gateway.inner().list_calls(), 1);
        assert_eq!(gateway.cached_entries(), 1);
    }

    #[tokio::test]
    async fn test_different_queries_hit_the_network() {
        let gateway = CachedGateway::new(InMemoryGateway::with_fixtures(), Duration::from_secs(30));

        gateway.list_launches(&query()).await.unwrap();
        gateway
            .list_launches(&SearchQuery::new("", 30, PageSize::Thirty))
            .await
            .unwrap();

        assert_eq!(gateway.inner().list_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire_after_ttl() {
        let gateway = CachedGateway::new(InMemoryGateway::with_fixtures(), Duration::from_secs(30));

        gateway.list_launches(&query()).await.unwrap();
        tokio::time::advance(Duration::from_secs(31)).await;
        gateway.list_launches(&query()).await.unwrap();

        assert_eq!(gateway.inner().list_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entries_are_pruned_on_insert() {
        let gateway = CachedGateway::new(InMemoryGateway::with_fixtures(), Duration::from_secs(30));

        for offset in [0, 30, 60] {
            gateway
                .list_launches(&SearchQuery::new("", offset, PageSize::Thirty))
                .await
                .unwrap();
        }
        gateway.get_launch(&LaunchId::new("109")).await.unwrap();
        assert_eq!(gateway.cached_entries(), 4);

        tokio::time::advance(Duration::from_secs(31)).await;
        gateway
            .list_launches(&SearchQuery::new("crs", 0, PageSize::Thirty))
            .await
            .unwrap();
        assert_eq!(gateway.cached_entries(), 2);

        gateway.get_launch(&LaunchId::new("108")).await.unwrap();
        assert_eq!(gateway.cached_entries(), 2);
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_cache() {
        let gateway = CachedGateway::new(InMemoryGateway::with_fixtures(), Duration::ZERO);

        gateway.list_launches(&query()).await.unwrap();
        gateway.list_launches(&query()).await.unwrap();

        assert!(!gateway.is_enabled());
        assert_eq!(gateway.inner().list_calls(), 2);
        assert_eq!(gateway.cached_entries(), 0);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let inner = InMemoryGateway::with_fixtures();
        inner.fail_with("backend down");
        let gateway = CachedGateway::new(inner, Duration::from_secs(30));

        assert!(gateway.list_launches(&query()).await.is_err());
        gateway.inner().recover();
        assert!(gateway.list_launches(&query()).await.is_ok());
        assert_eq!(gateway.inner().list_calls(), 2);
    }

    #[tokio::test]
    async fn test_not_found_launch_is_cached() {
        let gateway = CachedGateway::new(InMemoryGateway::with_fixtures(), Duration::from_secs(30));
        let id = LaunchId::new("234234");

        assert_eq!(gateway.get_launch(&id).await.unwrap(), None);
        assert_eq!(gateway.get_launch(&id).await.unwrap(), None);
        assert_eq!(gateway.inner().get_calls(), 1);
    }
}
