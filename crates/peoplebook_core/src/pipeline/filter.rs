//! Filter stage.
//!
//! # Invariants
//! - Output is an order-preserving subsequence of the input.
//! - Inactive predicates (no sex, blank query, no centuries) pass everything.

use crate::model::person::{Person, Sex};
use crate::view::state::ViewState;

/// Returns the records that pass every active predicate of `view`.
pub fn filter_people<'a>(people: &'a [Person], view: &ViewState) -> Vec<&'a Person> {
    let needle = view.query.trim().to_lowercase();
    people
        .iter()
        .filter(|person| matches_sex(person, view.sex))
        .filter(|person| matches_text(person, &needle))
        .filter(|person| matches_centuries(person, &view.centuries))
        .collect()
}

fn matches_sex(person: &Person, sex: Option<Sex>) -> bool {
    match sex {
        Some(sex) => person.sex == sex,
        None => true,
    }
}

/// `needle` must already be lowercased.
fn matches_text(person: &Person, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |value: &str| value.to_lowercase().contains(needle);
    contains(&person.name)
        || person.mother_name.as_deref().is_some_and(contains)
        || person.father_name.as_deref().is_some_and(contains)
}

fn matches_centuries(person: &Person, centuries: &[i32]) -> bool {
    centuries.is_empty()
        || centuries.contains(&person.born_century())
        || centuries.contains(&person.died_century())
}
