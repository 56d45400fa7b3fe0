//! Person record model.
//!
//! # Responsibility
//! - Define the canonical record rendered by the people table.
//! - Validate record-level and record-set invariants after loading.
//!
//! # Invariants
//! - `slug` is unique across one record set and safe as a path segment.
//! - `died` is never earlier than `born`.
//! - Parent names are plain strings, never references to other records.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier of a person record, also used as a URL path segment.
pub type PersonSlug = String;

/// Recorded sex of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    /// Wire value used in records and the `sex` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
        }
    }

    /// Parses a wire value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "m" => Some(Self::Male),
            "f" => Some(Self::Female),
            _ => None,
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the people directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub slug: PersonSlug,
    pub name: String,
    pub sex: Sex,
    /// Birth year.
    pub born: i32,
    /// Death year. Must be >= `born`.
    pub died: i32,
    /// Free-text mother name; may match zero, one or several records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    /// Free-text father name; same caveat as `mother_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
}

/// Validation failures for person records and record sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    InvalidSlug(String),
    BlankName(PersonSlug),
    DiedBeforeBorn {
        slug: PersonSlug,
        born: i32,
        died: i32,
    },
    DuplicateSlug(PersonSlug),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSlug(slug) => write!(f, "invalid person slug `{slug}`"),
            Self::BlankName(slug) => write!(f, "person `{slug}` has a blank name"),
            Self::DiedBeforeBorn { slug, born, died } => write!(
                f,
                "person `{slug}` died ({died}) before being born ({born})"
            ),
            Self::DuplicateSlug(slug) => write!(f, "duplicate person slug `{slug}`"),
        }
    }
}

impl Error for PersonValidationError {}

impl Person {
    /// Creates a record without parent names.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        sex: Sex,
        born: i32,
        died: i32,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            sex,
            born,
            died,
            mother_name: None,
            father_name: None,
        }
    }

    /// Builder-style setter for the mother name.
    pub fn with_mother(mut self, name: impl Into<String>) -> Self {
        self.mother_name = Some(name.into());
        self
    }

    /// Builder-style setter for the father name.
    pub fn with_father(mut self, name: impl Into<String>) -> Self {
        self.father_name = Some(name.into());
        self
    }

    /// Century of the birth year.
    pub fn born_century(&self) -> i32 {
        century_of(self.born)
    }

    /// Century of the death year.
    pub fn died_century(&self) -> i32 {
        century_of(self.died)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if !is_path_segment(&self.slug) {
            return Err(PersonValidationError::InvalidSlug(self.slug.clone()));
        }
        if self.name.trim().is_empty() {
            return Err(PersonValidationError::BlankName(self.slug.clone()));
        }
        if self.died < self.born {
            return Err(PersonValidationError::DiedBeforeBorn {
                slug: self.slug.clone(),
                born: self.born,
                died: self.died,
            });
        }
        Ok(())
    }
}

/// Returns `ceil(year / 100)`; year 1600 belongs to century 16, 1601 to 17.
///
/// Defined for the whole `i32` range.
pub fn century_of(year: i32) -> i32 {
    year.div_euclid(100) + i32::from(year.rem_euclid(100) != 0)
}

/// A slug must be non-blank and must not contain a path separator.
fn is_path_segment(slug: &str) -> bool {
    !slug.trim().is_empty() && !slug.contains('/')
}

/// Validates every record and slug uniqueness across the set.
pub fn validate_people(people: &[Person]) -> Result<(), PersonValidationError> {
    let mut seen = HashSet::with_capacity(people.len());
    for person in people {
        person.validate()?;
        if !seen.insert(person.slug.as_str()) {
            return Err(PersonValidationError::DuplicateSlug(person.slug.clone()));
        }
    }
    Ok(())
}
