//! Events fed into the navigator and the effects it emits

use super::error::NavigationError;
use std::fmt;
use std::str::FromStr;

/// Input to the navigation state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// First load at the given path
    Mount(String),
    /// The host moved to a new path (link, back button)
    PathChanged(String),
    /// The user opened the detail overlay for a record id
    Open(String),
    /// The user closed the detail overlay
    Close,
    /// The search box text changed
    Query(String),
    /// The user clicked a region; clicking the active region clears it
    RegionClick(String),
    /// Drop the region filter
    ClearRegion,
}

impl FromStr for NavEvent {
    type Err = NavigationError;

    /// Parse `keyword[:argument]`, e.g. `open:paris`, `goto:/france`, `close`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (keyword, argument) = match s.split_once(':') {
            Some((keyword, argument)) => (keyword.trim(), Some(argument)),
            None => (s.trim(), None),
        };

        let require = |argument: Option<&str>| {
            argument
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .ok_or_else(|| NavigationError::MissingArgument(keyword.to_string()))
        };

        match keyword {
            "mount" => Ok(Self::Mount(require(argument)?)),
            "goto" | "path" => Ok(Self::PathChanged(require(argument)?)),
            "open" => Ok(Self::Open(require(argument)?)),
            "close" => Ok(Self::Close),
            "query" | "q" => Ok(Self::Query(argument.unwrap_or_default().to_string())),
            "region" => Ok(Self::RegionClick(require(argument)?)),
            "clear-region" => Ok(Self::ClearRegion),
            other => Err(NavigationError::UnknownEvent(other.to_string())),
        }
    }
}

/// Side effect requested by the navigator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move the host to `path`
    Navigate { path: String, preserve_scroll: bool },
    /// Show the not-found page for `path`
    NotFound(String),
}

impl Effect {
    /// A navigation that keeps the current scroll position
    #[must_use]
    pub fn navigate(path: impl Into<String>) -> Self {
        Self::Navigate {
            path: path.into(),
            preserve_scroll: true,
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigate { path, .. } => write!(f, "navigate {path}"),
            Self::NotFound(path) => write!(f, "not found {path}"),
        }
    }
}
