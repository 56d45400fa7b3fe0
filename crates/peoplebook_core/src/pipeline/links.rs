//! Cross-reference stage: parent names to person records.
//!
//! # Responsibility
//! - Resolve free-text parent names against the full record list.
//! - Derive link presentation (target path, emphasis) for resolved records.
//!
//! # Invariants
//! - Lookups always scan the full unfiltered list, never the current view.
//! - Exact name equality; the first match in source order wins.

use crate::model::person::{Person, Sex};
use crate::view::location::person_path;

/// Visual emphasis of a person link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEmphasis {
    None,
    /// Female records are highlighted.
    Female,
}

impl LinkEmphasis {
    pub fn for_person(person: &Person) -> Self {
        match person.sex {
            Sex::Female => Self::Female,
            Sex::Male => Self::None,
        }
    }
}

/// Interactive link to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonLink {
    pub slug: String,
    pub name: String,
    /// Path of the people page with this record selected.
    pub path: String,
    pub emphasis: LinkEmphasis,
}

impl PersonLink {
    pub fn from_person(person: &Person) -> Self {
        Self {
            slug: person.slug.clone(),
            name: person.name.clone(),
            path: person_path(&person.slug),
            emphasis: LinkEmphasis::for_person(person),
        }
    }
}

/// Rendering of a mother/father cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentCell {
    /// No parent name recorded.
    Missing,
    /// Name recorded but no record carries it.
    Plain(String),
    Link(PersonLink),
}

/// Finds the first record named exactly `name` in `all_people`.
pub fn resolve_parent_link<'a>(name: &str, all_people: &'a [Person]) -> Option<&'a Person> {
    all_people.iter().find(|person| person.name == name)
}

/// Builds the cell for an optional parent name.
///
/// An absent, empty or whitespace-only name renders as `Missing`.
pub fn parent_cell(name: Option<&str>, all_people: &[Person]) -> ParentCell {
    let Some(name) = name.filter(|name| !name.trim().is_empty()) else {
        return ParentCell::Missing;
    };
    match resolve_parent_link(name, all_people) {
        Some(parent) => ParentCell::Link(PersonLink::from_person(parent)),
        None => ParentCell::Plain(name.to_string()),
    }
}
