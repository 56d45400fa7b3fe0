//! Core logic for the Peoplebook directory browser.
//! Records go in, a URL-addressed view comes out; everything in between is
//! pure and recomputed per render.

pub mod logging;
pub mod model;
pub mod page;
pub mod pipeline;
pub mod service;
pub mod session;
pub mod source;
pub mod view;

pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget, LoggingError,
};
pub use model::person::{century_of, validate_people, Person, PersonValidationError, Sex};
pub use page::filters::{CenturyOption, FilterPanel, SexOption};
pub use page::table::{ColumnHeader, PeopleTable, PersonRow, SortIndicator};
pub use page::{
    compose_people_page, render_location, AppView, PageBody, PeoplePageView, LOAD_ERROR_MESSAGE,
    NO_MATCHES_MESSAGE, NO_PEOPLE_MESSAGE,
};
pub use pipeline::filter::filter_people;
pub use pipeline::links::{
    parent_cell, resolve_parent_link, LinkEmphasis, ParentCell, PersonLink,
};
pub use pipeline::sort::{locale_cmp, sort_people};
pub use pipeline::visible_people;
pub use service::people_page::PeoplePageService;
pub use session::{LoadState, LoadTicket, PeopleSession, SettleOutcome};
pub use source::{
    parse_people_json, JsonFilePeopleSource, PeopleSource, SourceError, SourceResult,
    StaticPeopleSource,
};
pub use view::location::{Location, Route};
pub use view::params::SearchParams;
pub use view::state::{SortField, SortOrder, ViewState, SELECTABLE_CENTURIES};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
