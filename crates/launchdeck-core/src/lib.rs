//! # launchdeck-core - Core Domain Types
//!
//! Foundation crate for launchdeck. Provides the launch catalog domain types,
//! the search query value object, routes, date formatting and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Launch Catalog (`launch`)
//! - [`LaunchId`] - Opaque launch identifier
//! - [`LaunchRecord`] - One historical launch with optional media fields
//! - [`LaunchPage`] - One window of launches plus the total match count
//!
//! ### Queries (`query`)
//! - [`SearchQuery`] - Filter + offset + limit value object
//! - [`PageSize`] - Allowed page sizes (30, 50, 100)
//!
//! ### Routes (`route`)
//! - [`Route`] - Addressable views (`/` and `/launch/{id}`)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Application error enum, grouped by layer
//! - [`TransportError`] - Remote call failure carrying the backend message
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use launchdeck_core::prelude::*;
//! ```

pub mod error;
pub mod format;
pub mod launch;
pub mod logging;
pub mod query;
pub mod route;

/// Prelude for common imports used throughout all launchdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, TransportError};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, TransportError};
pub use format::{format_detail_date, format_list_date, DETAIL_DATE_FORMAT, LIST_DATE_FORMAT};
pub use launch::{LaunchId, LaunchPage, LaunchRecord};
pub use query::{normalize_filter, PageSize, SearchQuery};
pub use route::Route;
