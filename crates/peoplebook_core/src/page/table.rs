//! People table view model.

use crate::model::person::{Person, Sex};
use crate::pipeline::links::{parent_cell, ParentCell, PersonLink};
use crate::view::location::Location;
use crate::view::state::{SortField, SortOrder, ViewState};
use crate::view::transition::sort_by;

/// Sort icon state of one column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn for_column(view: &ViewState, field: SortField) -> Self {
        if view.sort != Some(field) {
            return Self::Unsorted;
        }
        match view.order {
            SortOrder::Asc => Self::Ascending,
            SortOrder::Desc => Self::Descending,
        }
    }
}

/// Sortable column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub field: SortField,
    pub label: &'static str,
    pub indicator: SortIndicator,
    /// Location produced by activating this header.
    pub activate: Location,
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    pub person: PersonLink,
    pub sex: Sex,
    pub born: i32,
    pub died: i32,
    pub mother: ParentCell,
    pub father: ParentCell,
    /// Row matches the slug in the location path.
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeopleTable {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<PersonRow>,
}

/// Builds the table for already filtered and sorted records.
///
/// Parent links resolve against `all_people`, not against `visible`.
pub fn build_table(
    visible: &[&Person],
    all_people: &[Person],
    location: &Location,
    selected_slug: Option<&str>,
) -> PeopleTable {
    let view = location.view_state();
    let columns = SortField::ALL
        .iter()
        .map(|&field| ColumnHeader {
            field,
            label: field.label(),
            indicator: SortIndicator::for_column(&view, field),
            activate: location.with_params(sort_by(&location.params, field)),
        })
        .collect();

    let rows = visible
        .iter()
        .map(|person| PersonRow {
            person: PersonLink::from_person(person),
            sex: person.sex,
            born: person.born,
            died: person.died,
            mother: parent_cell(person.mother_name.as_deref(), all_people),
            father: parent_cell(person.father_name.as_deref(), all_people),
            selected: selected_slug == Some(person.slug.as_str()),
        })
        .collect();

    PeopleTable { columns, rows }
}
