//! Address-bar locations and route matching.
//!
//! # Responsibility
//! - Split a location into path and query parameters.
//! - Map paths onto the directory's routes.
//!
//! # Invariants
//! - Unknown paths resolve to `Route::NotFound`, never to an error.
//! - Fragments are ignored.

use crate::view::params::SearchParams;
use crate::view::state::ViewState;
use std::fmt::{Display, Formatter};

pub const PEOPLE_PATH: &str = "/people";

/// Page addressed by a location path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Legacy `/home`; callers replace the location with `/`.
    RedirectHome,
    /// People page with an optional selected record slug.
    People { slug: Option<String> },
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/home" => Self::RedirectHome,
            PEOPLE_PATH => Self::People { slug: None },
            _ => match trimmed.strip_prefix("/people/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => Self::People {
                    slug: Some(slug.to_string()),
                },
                _ => Self::NotFound,
            },
        }
    }
}

/// A path plus its query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub params: SearchParams,
}

impl Location {
    /// Parses `path?query#fragment`. A missing path means `/`.
    pub fn parse(raw: &str) -> Self {
        let without_fragment = raw.split('#').next().unwrap_or_default();
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, query),
            None => (without_fragment, ""),
        };
        let path = if path.is_empty() { "/" } else { path };
        Self {
            path: path.to_string(),
            params: SearchParams::parse(query),
        }
    }

    /// Same path, different params.
    pub fn with_params(&self, params: SearchParams) -> Self {
        Self {
            path: self.path.clone(),
            params,
        }
    }

    pub fn route(&self) -> Route {
        Route::from_path(&self.path)
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::from_params(&self.params)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.params.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.params.encode())
        }
    }
}

/// Path of the people page with `slug` selected.
pub fn person_path(slug: &str) -> String {
    format!("{PEOPLE_PATH}/{slug}")
}
