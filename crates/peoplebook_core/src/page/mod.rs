//! People page composition.
//!
//! # Responsibility
//! - Pick exactly one display condition from load state and view state.
//! - Assemble the table and filter panel view models.
//!
//! # Invariants
//! - Conditions are evaluated in order: loading, failed, empty source,
//!   no matches, table.
//! - Filters are visible only once records are present.
//! - Selection highlights a row and never changes the visible record set.

pub mod filters;
pub mod table;

use crate::pipeline::visible_people;
use crate::session::LoadState;
use crate::view::location::{Location, Route};
use filters::{build_filter_panel, FilterPanel};
use table::{build_table, PeopleTable};

pub const LOAD_ERROR_MESSAGE: &str = "Something went wrong";
pub const NO_PEOPLE_MESSAGE: &str = "There are no people on the server";
pub const NO_MATCHES_MESSAGE: &str = "There are no people matching the current search criteria";

/// Main content of the people page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    Loading,
    LoadError,
    NoPeopleOnServer,
    NoMatchingPeople,
    Table(PeopleTable),
}

impl PageBody {
    /// User-facing message for message-only bodies.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::LoadError => Some(LOAD_ERROR_MESSAGE),
            Self::NoPeopleOnServer => Some(NO_PEOPLE_MESSAGE),
            Self::NoMatchingPeople => Some(NO_MATCHES_MESSAGE),
            Self::Loading | Self::Table(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeoplePageView {
    pub body: PageBody,
    /// `None` while the filter panel is hidden.
    pub filters: Option<FilterPanel>,
    pub selected_slug: Option<String>,
}

/// Top-level outcome of rendering a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppView {
    Home,
    /// Replace the current location with this one.
    Redirect(Location),
    People(PeoplePageView),
    NotFound,
}

/// Composes the people page for `location`.
pub fn compose_people_page(load: &LoadState, location: &Location) -> PeoplePageView {
    let selected_slug = match location.route() {
        Route::People { slug } => slug,
        _ => None,
    };

    let people = match load {
        LoadState::Idle | LoadState::Loading => {
            return hidden_filters(PageBody::Loading, selected_slug);
        }
        LoadState::Failed => return hidden_filters(PageBody::LoadError, selected_slug),
        LoadState::Loaded(people) if people.is_empty() => {
            return hidden_filters(PageBody::NoPeopleOnServer, selected_slug);
        }
        LoadState::Loaded(people) => people,
    };

    let view = location.view_state();
    let visible = visible_people(people, &view);
    let body = if visible.is_empty() {
        PageBody::NoMatchingPeople
    } else {
        PageBody::Table(build_table(
            &visible,
            people,
            location,
            selected_slug.as_deref(),
        ))
    };

    PeoplePageView {
        body,
        filters: Some(build_filter_panel(location)),
        selected_slug,
    }
}

/// Routes `location` and composes the matching view.
pub fn render_location(load: &LoadState, location: &Location) -> AppView {
    match location.route() {
        Route::Home => AppView::Home,
        Route::RedirectHome => AppView::Redirect(Location::parse("/")),
        Route::People { .. } => AppView::People(compose_people_page(load, location)),
        Route::NotFound => AppView::NotFound,
    }
}

fn hidden_filters(body: PageBody, selected_slug: Option<String>) -> PeoplePageView {
    PeoplePageView {
        body,
        filters: None,
        selected_slug,
    }
}
