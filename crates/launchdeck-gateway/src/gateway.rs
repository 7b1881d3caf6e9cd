//! The fetch gateway contract

use launchdeck_core::{LaunchId, LaunchPage, LaunchRecord, SearchQuery, TransportError};

/// Remote read operations used by the launch controllers.
///
/// `get_launch` returning `Ok(None)` means the record does not exist; that is
/// a normal outcome, not a transport failure. Implementations may cache, but
/// callers must never rely on it.
#[trait_variant::make(FetchGateway: Send)]
pub trait LocalFetchGateway {
    /// Fetch one window of launches matching the query.
    async fn list_launches(&self, query: &SearchQuery) -> Result<LaunchPage, TransportError>;

    /// Fetch a single launch by id.
    async fn get_launch(&self, id: &LaunchId) -> Result<Option<LaunchRecord>, TransportError>;
}
