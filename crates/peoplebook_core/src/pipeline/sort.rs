//! Sort stage.
//!
//! # Invariants
//! - Returns a new ordering; the input slice is left untouched.
//! - Sorting is stable, including for descending order.
//! - Without a recognized field the input order is kept as is.

use crate::model::person::Person;
use crate::view::state::{SortField, SortOrder};
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

/// Orders `people` by `field` in `order`.
pub fn sort_people<'a>(
    people: &[&'a Person],
    field: Option<SortField>,
    order: SortOrder,
) -> Vec<&'a Person> {
    let mut sorted = people.to_vec();
    let Some(field) = field else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let result = compare_by(a, b, field);
        match order {
            SortOrder::Asc => result,
            SortOrder::Desc => result.reverse(),
        }
    });
    sorted
}

fn compare_by(a: &Person, b: &Person, field: SortField) -> Ordering {
    match field {
        SortField::Name => locale_cmp(&a.name, &b.name),
        SortField::Sex => locale_cmp(a.sex.as_str(), b.sex.as_str()),
        SortField::Born => a.born.cmp(&b.born),
        SortField::Died => a.died.cmp(&b.died),
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Human-oriented string ordering under the root collation.
///
/// Accents and case only break ties between otherwise equal letters, so
/// "Émile" sorts with the E names and "anna" sorts just before "Anna".
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| collator.as_ref().map(|collator| collator.compare(a, b)))
        .unwrap_or_else(|| case_folded_cmp(a, b))
}

// Used only if the compiled collation data cannot be loaded.
fn case_folded_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }

    for (left, right) in a.chars().zip(b.chars()) {
        if left == right {
            continue;
        }
        match (left.is_lowercase(), right.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => break,
        }
    }
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::{locale_cmp, sort_people};
    use crate::model::person::{Person, Sex};
    use crate::view::state::{SortField, SortOrder};
    use std::cmp::Ordering;

    #[test]
    fn locale_cmp_ignores_case_before_breaking_ties() {
        assert_eq!(locale_cmp("anna", "Bob"), Ordering::Less);
        assert_eq!(locale_cmp("Zed", "adam"), Ordering::Greater);
        assert_eq!(locale_cmp("anna", "Anna"), Ordering::Less);
        assert_eq!(locale_cmp("Anna", "Anna"), Ordering::Equal);
    }

    #[test]
    fn locale_cmp_sorts_accented_letters_with_their_base_letter() {
        assert_eq!(locale_cmp("Émile", "Zoe"), Ordering::Less);
        assert_eq!(locale_cmp("Edgar", "Émile"), Ordering::Less);
        assert_eq!(locale_cmp("Émile", "Emilia"), Ordering::Less);
        assert_eq!(locale_cmp("Øystein", "Zoe"), Ordering::Less);
    }

    #[test]
    fn case_folded_fallback_matches_case_rules() {
        assert_eq!(super::case_folded_cmp("anna", "Anna"), Ordering::Less);
        assert_eq!(super::case_folded_cmp("Zed", "adam"), Ordering::Greater);
    }

    #[test]
    fn descending_sort_keeps_ties_in_input_order() {
        let people = [
            Person::new("a", "A", Sex::Male, 1800, 1850),
            Person::new("b", "B", Sex::Female, 1900, 1950),
            Person::new("c", "C", Sex::Male, 1800, 1860),
        ];
        let refs = people.iter().collect::<Vec<_>>();
        let sorted = sort_people(&refs, Some(SortField::Born), SortOrder::Desc);
        let slugs = sorted.iter().map(|p| p.slug.as_str()).collect::<Vec<_>>();
        assert_eq!(slugs, vec!["b", "a", "c"]);
    }

    #[test]
    fn missing_field_keeps_filtered_order_and_ignores_order() {
        let people = [
            Person::new("b", "B", Sex::Male, 1900, 1950),
            Person::new("a", "A", Sex::Male, 1800, 1850),
        ];
        let refs = people.iter().collect::<Vec<_>>();
        let sorted = sort_people(&refs, None, SortOrder::Desc);
        assert_eq!(sorted, refs);
    }
}
