//! Path shapes recognised by the router

use std::fmt;
use std::str::FromStr;

/// Informational pages with no dynamic state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticPage {
    License,
    Faq,
    Stats,
    Changelog,
    Random,
}

impl StaticPage {
    /// All static pages
    pub const ALL: [Self; 5] = [
        Self::License,
        Self::Faq,
        Self::Stats,
        Self::Changelog,
        Self::Random,
    ];

    /// The page's path segment
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::License => "license",
            Self::Faq => "faq",
            Self::Stats => "stats",
            Self::Changelog => "changelog",
            Self::Random => "random",
        }
    }
}

impl FromStr for StaticPage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|page| page.segment() == s).ok_or(())
    }
}

/// A parsed URL path
///
/// Parsing is purely structural; whether a country or detail route resolves
/// to anything is decided against the catalog by the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Root,
    /// `/license`, `/faq`, ...
    Static(StaticPage),
    /// `/{countrySlug}`
    Country(String),
    /// `/{countrySlug}/{citySlug}`
    Detail { country: String, city: String },
    /// Anything with three or more segments
    Malformed,
}

impl Route {
    /// Parse a path, ignoring query strings, fragments and empty segments
    ///
    /// # Examples
    /// ```
    /// use cityicons::navigation::Route;
    ///
    /// assert_eq!(Route::parse("/"), Route::Root);
    /// assert_eq!(Route::parse("/france/"), Route::Country("france".into()));
    /// assert_eq!(Route::parse("/a/b/c"), Route::Malformed);
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Root,
            [single] => single
                .parse::<StaticPage>()
                .map_or_else(|()| Self::Country((*single).to_string()), Self::Static),
            [country, city] => Self::Detail {
                country: (*country).to_string(),
                city: (*city).to_string(),
            },
            _ => Self::Malformed,
        }
    }
}

impl fmt::Display for Route {
    /// Canonical path; malformed routes render as the root
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root | Self::Malformed => write!(f, "/"),
            Self::Static(page) => write!(f, "/{}", page.segment()),
            Self::Country(country) => write!(f, "/{country}"),
            Self::Detail { country, city } => write!(f, "/{country}/{city}"),
        }
    }
}
