//! Pure derivation pipeline from records and view state to table rows.
//!
//! # Responsibility
//! - Filter, sort and cross-reference person records.
//!
//! # Invariants
//! - Every stage is a total, side-effect-free function.
//! - Records are borrowed; no stage clones or mutates the source list.

pub mod filter;
pub mod links;
pub mod sort;

use crate::model::person::Person;
use crate::view::state::ViewState;

/// Runs filter then sort for one view.
pub fn visible_people<'a>(people: &'a [Person], view: &ViewState) -> Vec<&'a Person> {
    let filtered = filter::filter_people(people, view);
    sort::sort_people(&filtered, view.sort, view.order)
}
