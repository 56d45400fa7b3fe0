//! Filter and sort transitions over query parameters.
//!
//! # Responsibility
//! - Derive the next query parameters for every filter-panel and
//!   column-header action.
//!
//! # Invariants
//! - Inputs are never mutated; each transition returns new params.
//! - Parameters not touched by a transition keep their values and order.
//! - Column activation cycles unsorted -> asc -> desc -> unsorted.

use crate::model::person::Sex;
use crate::view::params::SearchParams;
use crate::view::state::{
    SortField, SortOrder, PARAM_CENTURIES, PARAM_ORDER, PARAM_QUERY, PARAM_SEX, PARAM_SORT,
};

/// Sets the free-text filter. Blank input removes `query`.
pub fn set_query(params: &SearchParams, text: &str) -> SearchParams {
    let mut next = params.clone();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        next.delete(PARAM_QUERY);
    } else {
        next.set(PARAM_QUERY, trimmed);
    }
    next
}

/// Sets or clears the sex filter. Re-selecting the current value is a no-op.
pub fn set_sex(params: &SearchParams, sex: Option<Sex>) -> SearchParams {
    let mut next = params.clone();
    match sex {
        Some(sex) => next.set(PARAM_SEX, sex.as_str()),
        None => next.delete(PARAM_SEX),
    }
    next
}

/// Removes `century` when selected, otherwise appends it.
///
/// Selection is decided on decoded values, so ` 16` and `16` are the same
/// century and both are removed together.
pub fn toggle_century(params: &SearchParams, century: i32) -> SearchParams {
    let mut next = params.clone();
    let selected = params.get_all(PARAM_CENTURIES);
    let is_century = |raw: &&str| raw.trim().parse::<i32>() == Ok(century);
    if selected.iter().any(is_century) {
        let remaining = selected
            .into_iter()
            .filter(|raw| !is_century(raw))
            .map(str::to_string)
            .collect::<Vec<_>>();
        next.delete(PARAM_CENTURIES);
        for raw in remaining {
            next.append(PARAM_CENTURIES, raw);
        }
    } else {
        next.append(PARAM_CENTURIES, century.to_string());
    }
    next
}

/// Drops every century selection and nothing else.
pub fn clear_centuries(params: &SearchParams) -> SearchParams {
    let mut next = params.clone();
    next.delete(PARAM_CENTURIES);
    next
}

/// Advances the column-header state machine for `field`.
///
/// A different column always starts ascending; the active column goes
/// ascending -> descending -> unsorted.
pub fn sort_by(params: &SearchParams, field: SortField) -> SearchParams {
    let mut next = params.clone();
    let active = params.get(PARAM_SORT).and_then(SortField::parse);
    let order = params
        .get(PARAM_ORDER)
        .map(SortOrder::parse)
        .unwrap_or_default();

    if active != Some(field) {
        next.set(PARAM_SORT, field.as_str());
        next.delete(PARAM_ORDER);
    } else if order == SortOrder::Asc {
        next.set(PARAM_ORDER, SortOrder::Desc.as_str());
    } else {
        next.delete(PARAM_SORT);
        next.delete(PARAM_ORDER);
    }
    next
}

/// Clears every parameter.
pub fn reset_filters(_params: &SearchParams) -> SearchParams {
    SearchParams::default()
}

#[cfg(test)]
mod tests {
    use super::{clear_centuries, set_query, set_sex, sort_by, toggle_century};
    use crate::model::person::Sex;
    use crate::view::params::SearchParams;
    use crate::view::state::SortField;

    #[test]
    fn set_query_trims_and_removes_blank_values() {
        let params = SearchParams::parse("sex=m");
        assert_eq!(set_query(&params, "  ann ").encode(), "sex=m&query=ann");
        let with_query = SearchParams::parse("query=ann&sex=m");
        assert_eq!(set_query(&with_query, "   ").encode(), "sex=m");
    }

    #[test]
    fn set_sex_is_idempotent() {
        let params = SearchParams::parse("sex=f&query=a");
        assert_eq!(set_sex(&params, Some(Sex::Female)), params);
        assert_eq!(set_sex(&params, None).encode(), "query=a");
    }

    #[test]
    fn toggle_century_removes_selected_value_and_keeps_the_rest() {
        let params = SearchParams::parse("centuries=16&query=a&centuries=18");
        assert_eq!(
            toggle_century(&params, 16).encode(),
            "query=a&centuries=18"
        );
        assert_eq!(
            toggle_century(&params, 19).encode(),
            "centuries=16&query=a&centuries=18&centuries=19"
        );
    }

    #[test]
    fn toggle_century_matches_values_that_decode_to_the_same_century() {
        let padded = SearchParams::parse("centuries=16%20&sex=f");
        assert_eq!(toggle_century(&padded, 16).encode(), "sex=f");

        let mixed = SearchParams::parse("centuries=016&centuries=x&centuries=+16");
        assert_eq!(toggle_century(&mixed, 16).encode(), "centuries=x");
    }

    #[test]
    fn clear_centuries_leaves_other_filters() {
        let params = SearchParams::parse("centuries=16&sex=m&centuries=17");
        assert_eq!(clear_centuries(&params).encode(), "sex=m");
    }

    #[test]
    fn switching_column_restarts_ascending() {
        let params = SearchParams::parse("sort=name&order=desc");
        assert_eq!(sort_by(&params, SortField::Born).encode(), "sort=born");
    }
}
