//! Typed view state decoded from query parameters.
//!
//! # Responsibility
//! - Decode the filter/sort selection from a query string.
//! - Encode a view state back into canonical query parameters.
//!
//! # Invariants
//! - Decoding never fails; missing or unknown values fall back to defaults.
//! - A `ViewState` is a value: changes go through new query strings.

use crate::model::person::Sex;
use crate::view::params::SearchParams;

pub const PARAM_QUERY: &str = "query";
pub const PARAM_SEX: &str = "sex";
pub const PARAM_CENTURIES: &str = "centuries";
pub const PARAM_SORT: &str = "sort";
pub const PARAM_ORDER: &str = "order";

/// Centuries offered by the filter panel.
pub const SELECTABLE_CENTURIES: [i32; 5] = [16, 17, 18, 19, 20];

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Sex,
    Born,
    Died,
}

impl SortField {
    pub const ALL: [SortField; 4] = [Self::Name, Self::Sex, Self::Born, Self::Died];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Sex => "sex",
            Self::Born => "born",
            Self::Died => "died",
        }
    }

    /// Column label shown in the table header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Sex => "Sex",
            Self::Born => "Born",
            Self::Died => "Died",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "sex" => Some(Self::Sex),
            "born" => Some(Self::Born),
            "died" => Some(Self::Died),
            _ => None,
        }
    }
}

/// Sort direction. Anything but `desc` reads as ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Filter and sort selection for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Trimmed free-text filter; empty means no text filter.
    pub query: String,
    pub sex: Option<Sex>,
    /// Selected centuries in selection order, without duplicates.
    pub centuries: Vec<i32>,
    pub sort: Option<SortField>,
    pub order: SortOrder,
}

impl ViewState {
    /// Decodes a raw query string (leading `?` optional).
    pub fn decode(query_string: &str) -> Self {
        Self::from_params(&SearchParams::parse(query_string))
    }

    pub fn from_params(params: &SearchParams) -> Self {
        let query = params
            .get(PARAM_QUERY)
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        let sex = params.get(PARAM_SEX).and_then(Sex::parse);

        let mut centuries = Vec::new();
        for raw in params.get_all(PARAM_CENTURIES) {
            if let Ok(century) = raw.trim().parse::<i32>() {
                if !centuries.contains(&century) {
                    centuries.push(century);
                }
            }
        }

        let sort = params.get(PARAM_SORT).and_then(SortField::parse);
        let order = params
            .get(PARAM_ORDER)
            .map(SortOrder::parse)
            .unwrap_or_default();

        Self {
            query,
            sex,
            centuries,
            sort,
            order,
        }
    }

    /// Canonical parameters for this state.
    ///
    /// `order` is emitted only for a descending sort on a known column.
    pub fn to_params(&self) -> SearchParams {
        let mut params = SearchParams::default();
        let query = self.query.trim();
        if !query.is_empty() {
            params.append(PARAM_QUERY, query);
        }
        if let Some(sex) = self.sex {
            params.append(PARAM_SEX, sex.as_str());
        }
        for century in &self.centuries {
            params.append(PARAM_CENTURIES, century.to_string());
        }
        if let Some(sort) = self.sort {
            params.append(PARAM_SORT, sort.as_str());
            if self.order == SortOrder::Desc {
                params.append(PARAM_ORDER, SortOrder::Desc.as_str());
            }
        }
        params
    }

    pub fn encode(&self) -> String {
        self.to_params().encode()
    }

    pub fn is_century_selected(&self, century: i32) -> bool {
        self.centuries.contains(&century)
    }
}

#[cfg(test)]
mod tests {
    use super::{SortField, SortOrder, ViewState};
    use crate::model::person::Sex;

    #[test]
    fn missing_parameters_decode_to_defaults() {
        let state = ViewState::decode("");
        assert_eq!(state, ViewState::default());
        assert_eq!(state.order, SortOrder::Asc);
    }

    #[test]
    fn decode_trims_query_and_ignores_unknown_values() {
        let state = ViewState::decode("?query=%20bo%20&sex=x&sort=age&order=sideways");
        assert_eq!(state.query, "bo");
        assert_eq!(state.sex, None);
        assert_eq!(state.sort, None);
        assert_eq!(state.order, SortOrder::Asc);
    }

    #[test]
    fn decode_collects_centuries_in_order_and_skips_garbage() {
        let state = ViewState::decode("centuries=18&centuries=x&centuries=16&centuries=18");
        assert_eq!(state.centuries, vec![18, 16]);
    }

    #[test]
    fn encode_emits_order_only_for_descending_sort() {
        let state = ViewState {
            query: "ann".to_string(),
            sex: Some(Sex::Female),
            centuries: vec![17, 19],
            sort: Some(SortField::Born),
            order: SortOrder::Desc,
        };
        assert_eq!(
            state.encode(),
            "query=ann&sex=f&centuries=17&centuries=19&sort=born&order=desc"
        );
        assert_eq!(ViewState::decode(&state.encode()), state);

        let unsorted = ViewState {
            order: SortOrder::Desc,
            ..ViewState::default()
        };
        assert_eq!(unsorted.encode(), "");
    }
}
