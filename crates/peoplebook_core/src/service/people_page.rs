//! People page use-case service.
//!
//! # Responsibility
//! - Bind a record source to one page session.
//! - Render locations against the session's current load state.
//!
//! # Invariants
//! - The source is read at most once per service instance.
//! - Rendering is read-only; only `mount`/`unmount` change the session.

use crate::page::{render_location, AppView};
use crate::session::{PeopleSession, SettleOutcome};
use crate::source::PeopleSource;
use crate::view::location::Location;

/// Use-case facade for the people page.
pub struct PeoplePageService<S: PeopleSource> {
    source: S,
    session: PeopleSession,
}

impl<S: PeopleSource> PeoplePageService<S> {
    /// Creates an unmounted service over `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            session: PeopleSession::new(),
        }
    }

    /// Performs the one-time load. Later calls are no-ops returning `None`.
    pub fn mount(&mut self) -> Option<SettleOutcome> {
        self.session.load_from(&self.source)
    }

    /// Tears the session down; the service keeps serving its last state.
    pub fn unmount(&mut self) {
        self.session.teardown();
    }

    pub fn session(&self) -> &PeopleSession {
        &self.session
    }

    /// Renders `location` against the current load state.
    pub fn view(&self, location: &Location) -> AppView {
        render_location(self.session.state(), location)
    }
}
