//! Load lifecycle for one people-page mount.
//!
//! # Responsibility
//! - Track the single record load of a mounted page.
//! - Drop results that arrive after the page was torn down.
//!
//! # Invariants
//! - At most one load is started per session.
//! - Settling always clears the in-flight flag, on success and on failure.
//! - A torn-down session never changes state again.

use crate::model::person::Person;
use crate::source::{PeopleSource, SourceResult};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Observable state of the record load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Mounted, load not started yet.
    Idle,
    Loading,
    Loaded(Vec<Person>),
    /// Cause is intentionally not retained; every failure looks the same.
    Failed,
}

/// Proof that a load was started by a specific session.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket {
    session_id: u64,
}

/// What `settle` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    Applied,
    /// The session was torn down or the ticket is foreign.
    Discarded,
}

/// One mount of the people page.
#[derive(Debug)]
pub struct PeopleSession {
    id: u64,
    state: LoadState,
    started: bool,
    torn_down: bool,
}

impl Default for PeopleSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PeopleSession {
    pub fn new() -> Self {
        Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            state: LoadState::Idle,
            started: false,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Loaded records, if the load succeeded.
    pub fn people(&self) -> Option<&[Person]> {
        match &self.state {
            LoadState::Loaded(people) => Some(people),
            _ => None,
        }
    }

    /// Marks the load as in flight.
    ///
    /// Returns `None` when a load was already started or the session is gone.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.started || self.torn_down {
            debug!(
                "event=load_begin module=session status=skipped session={}",
                self.id
            );
            return None;
        }
        self.started = true;
        self.state = LoadState::Loading;
        debug!("event=load_begin module=session status=ok session={}", self.id);
        Some(LoadTicket {
            session_id: self.id,
        })
    }

    /// Applies the load result for `ticket`.
    pub fn settle(&mut self, ticket: LoadTicket, result: SourceResult<Vec<Person>>) -> SettleOutcome {
        if self.torn_down || ticket.session_id != self.id {
            info!(
                "event=load_settle module=session status=discarded session={}",
                self.id
            );
            return SettleOutcome::Discarded;
        }

        self.state = match result {
            Ok(people) => {
                info!(
                    "event=load_settle module=session status=ok session={} count={}",
                    self.id,
                    people.len()
                );
                LoadState::Loaded(people)
            }
            Err(err) => {
                warn!(
                    "event=load_settle module=session status=error session={} error={err}",
                    self.id
                );
                LoadState::Failed
            }
        };
        SettleOutcome::Applied
    }

    /// Starts and settles the load synchronously against `source`.
    ///
    /// Returns `None` when the load had already been started.
    pub fn load_from<S: PeopleSource>(&mut self, source: &S) -> Option<SettleOutcome> {
        let ticket = self.begin_load()?;
        let result = source.fetch_people();
        Some(self.settle(ticket, result))
    }

    /// Unmounts the page. Pending results will be discarded.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        debug!("event=teardown module=session status=ok session={}", self.id);
    }
}
