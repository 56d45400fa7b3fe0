//! Record source contracts.
//!
//! # Responsibility
//! - Define the one-shot read that supplies the full record list.
//! - Normalize every failure cause into `SourceError`.
//!
//! # Invariants
//! - A successful read returns a validated record set.
//! - Sources never return partial results.

use crate::model::person::{validate_people, Person, PersonValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json;

pub use json::{parse_people_json, JsonFilePeopleSource};

pub type SourceResult<T> = Result<T, SourceError>;

/// Failure to produce the record list.
#[derive(Debug)]
pub enum SourceError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Malformed(serde_json::Error),
    Invalid(PersonValidationError),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read people from `{}`: {source}", path.display())
            }
            Self::Malformed(err) => write!(f, "malformed people payload: {err}"),
            Self::Invalid(err) => write!(f, "invalid people payload: {err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

impl From<PersonValidationError> for SourceError {
    fn from(value: PersonValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// One-shot supplier of the full record list.
pub trait PeopleSource {
    fn fetch_people(&self) -> SourceResult<Vec<Person>>;
}

/// In-memory source, validated on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticPeopleSource {
    people: Vec<Person>,
}

impl StaticPeopleSource {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }
}

impl PeopleSource for StaticPeopleSource {
    fn fetch_people(&self) -> SourceResult<Vec<Person>> {
        validate_people(&self.people)?;
        Ok(self.people.clone())
    }
}

impl<S: PeopleSource + ?Sized> PeopleSource for &S {
    fn fetch_people(&self) -> SourceResult<Vec<Person>> {
        (**self).fetch_people()
    }
}
