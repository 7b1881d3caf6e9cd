//! Search query value object and page sizes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Allowed number of launches per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    #[default]
    Thirty,
    Fifty,
    Hundred,
}

impl PageSize {
    /// All page sizes in the order they are offered to the user.
    pub const ALL: [PageSize; 3] = [PageSize::Thirty, PageSize::Fifty, PageSize::Hundred];

    pub fn get(self) -> u32 {
        match self {
            PageSize::Thirty => 30,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Next option, wrapping from 100 back to 30.
    pub fn cycle(self) -> Self {
        match self {
            PageSize::Thirty => PageSize::Fifty,
            PageSize::Fifty => PageSize::Hundred,
            PageSize::Hundred => PageSize::Thirty,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            30 => Ok(PageSize::Thirty),
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            _ => Err(Error::InvalidPageSize { value }),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidPageSize { value: 0 })?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Trim a raw filter; blank input means "no filter".
pub fn normalize_filter(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One request for a window of launches.
///
/// Rebuilt on every user action; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    filter: Option<String>,
    offset: u32,
    limit: PageSize,
}

impl SearchQuery {
    pub fn new(filter: &str, offset: u32, limit: PageSize) -> Self {
        Self {
            filter: normalize_filter(filter),
            offset,
            limit,
        }
    }

    /// Mission-name filter, already trimmed and non-empty.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> PageSize {
        self.limit
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "offset={} limit={} filter={:?}",
            self.offset,
            self.limit,
            self.filter.as_deref().unwrap_or("")
        )
    }
}
