//! # launchdeck-gateway - Launch Data Service Access
//!
//! The boundary through which every remote read happens. The rest of the
//! workspace only sees the [`FetchGateway`] trait.
//!
//! Depends on [`launchdeck_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Contract
//! - [`FetchGateway`] - List launches by query, get one launch by id
//!
//! ### Implementations
//! - [`SpacexClient`] - GraphQL over HTTP against the SpaceX launch API
//! - [`CachedGateway`] - Short-lived response cache in front of any gateway
//! - `InMemoryGateway` - Fixture-backed gateway (`test-helpers` feature)

pub mod cache;
pub mod gateway;
pub mod graphql;
pub mod spacex;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use cache::CachedGateway;
pub use gateway::{FetchGateway, LocalFetchGateway};
pub use spacex::{SpacexClient, DEFAULT_ENDPOINT};
#[cfg(any(test, feature = "test-helpers"))]
pub use test_utils::InMemoryGateway;
