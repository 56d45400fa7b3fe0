//! Filter panel view model.

use crate::model::person::Sex;
use crate::view::location::Location;
use crate::view::state::SELECTABLE_CENTURIES;
use crate::view::transition::{clear_centuries, reset_filters, set_sex, toggle_century};

/// One entry of the sex tabs (`All`, `Male`, `Female`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SexOption {
    pub label: &'static str,
    pub sex: Option<Sex>,
    pub active: bool,
    pub activate: Location,
}

/// One century toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenturyOption {
    pub century: i32,
    pub selected: bool,
    pub toggle: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanel {
    pub sex_options: Vec<SexOption>,
    /// Current text filter, for the search input.
    pub query: String,
    pub centuries: Vec<CenturyOption>,
    pub all_centuries: Location,
    pub reset: Location,
}

pub fn build_filter_panel(location: &Location) -> FilterPanel {
    let view = location.view_state();
    let sex_options = [("All", None), ("Male", Some(Sex::Male)), ("Female", Some(Sex::Female))]
        .into_iter()
        .map(|(label, sex)| SexOption {
            label,
            sex,
            active: view.sex == sex,
            activate: location.with_params(set_sex(&location.params, sex)),
        })
        .collect();

    let centuries = SELECTABLE_CENTURIES
        .iter()
        .map(|&century| CenturyOption {
            century,
            selected: view.is_century_selected(century),
            toggle: location.with_params(toggle_century(&location.params, century)),
        })
        .collect();

    FilterPanel {
        sex_options,
        query: view.query,
        centuries,
        all_centuries: location.with_params(clear_centuries(&location.params)),
        reset: location.with_params(reset_filters(&location.params)),
    }
}
