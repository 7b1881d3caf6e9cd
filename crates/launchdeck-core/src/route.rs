//! Addressable views

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::launch::LaunchId;

const LAUNCH_PREFIX: &str = "/launch/";

/// A view the user can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Searchable launch list (`/`)
    #[default]
    Launches,
    /// Detail of one launch (`/launch/{id}`)
    Launch(LaunchId),
}

impl Route {
    pub fn launch(id: impl Into<LaunchId>) -> Self {
        Route::Launch(id.into())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Launches => "/".to_string(),
            Route::Launch(id) => format!("{LAUNCH_PREFIX}{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Ok(Route::Launches);
        }

        match trimmed.strip_prefix(LAUNCH_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Ok(Route::launch(id)),
            _ => Err(Error::invalid_route(trimmed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Launches.path(), "/");
        assert_eq!(Route::launch("109").path(), "/launch/109");
        assert_eq!(Route::launch("109").to_string(), "/launch/109");
    }

    #[test]
    fn test_route_parse() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Launches);
        assert_eq!("".parse::<Route>().unwrap(), Route::Launches);
        assert_eq!(
            "/launch/234234".parse::<Route>().unwrap(),
            Route::launch("234234")
        );
    }

    #[test]
    fn test_route_parse_rejects_unknown_paths() {
        assert!("/launch/".parse::<Route>().is_err());
        assert!("/launch/1/extra".parse::<Route>().is_err());
        assert!("/rockets".parse::<Route>().is_err());
    }
}
