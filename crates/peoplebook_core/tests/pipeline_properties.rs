use peoplebook_core::{
    filter_people, locale_cmp, resolve_parent_link, sort_people, visible_people, Person, Sex,
    SortField, SortOrder, ViewState,
};
use proptest::prelude::*;
use proptest::test_runner::Config;
use std::cmp::Ordering;

const NAMES: [&str; 6] = ["Anna", "anna", "Bob", "Jane", "Karl", "Lieve"];

fn person_strategy() -> impl Strategy<Value = (usize, bool, i32, i32, Option<usize>, Option<usize>)>
{
    (
        0..NAMES.len(),
        any::<bool>(),
        1500_i32..2000,
        0_i32..120,
        proptest::option::of(0..NAMES.len()),
        proptest::option::of(0..NAMES.len()),
    )
}

fn people_strategy() -> impl Strategy<Value = Vec<Person>> {
    proptest::collection::vec(person_strategy(), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (name, female, born, span, mother, father))| {
                let sex = if female { Sex::Female } else { Sex::Male };
                Person {
                    slug: format!("p-{index}"),
                    name: NAMES[name].to_string(),
                    sex,
                    born,
                    died: born + span,
                    mother_name: mother.map(|i| NAMES[i].to_string()),
                    father_name: father.map(|i| NAMES[i].to_string()),
                }
            })
            .collect()
    })
}

fn view_strategy() -> impl Strategy<Value = ViewState> {
    (
        prop_oneof![Just(""), Just("an"), Just("BO"), Just(" j "), Just("zz")],
        prop_oneof![Just(None), Just(Some(Sex::Male)), Just(Some(Sex::Female))],
        proptest::collection::vec(15_i32..21, 0..3),
        prop_oneof![
            Just(None),
            Just(Some(SortField::Name)),
            Just(Some(SortField::Sex)),
            Just(Some(SortField::Born)),
            Just(Some(SortField::Died)),
        ],
        any::<bool>(),
    )
        .prop_map(|(query, sex, centuries, sort, desc)| {
            let mut params = Vec::new();
            params.push(("query".to_string(), query.to_string()));
            if let Some(sex) = sex {
                params.push(("sex".to_string(), sex.as_str().to_string()));
            }
            for century in centuries {
                params.push(("centuries".to_string(), century.to_string()));
            }
            if let Some(sort) = sort {
                params.push(("sort".to_string(), sort.as_str().to_string()));
            }
            if desc {
                params.push(("order".to_string(), "desc".to_string()));
            }
            ViewState::from_params(&peoplebook_core::SearchParams::from_pairs(params))
        })
}

fn sort_key_cmp(a: &Person, b: &Person, field: SortField) -> Ordering {
    match field {
        SortField::Name => locale_cmp(&a.name, &b.name),
        SortField::Sex => a.sex.as_str().cmp(b.sex.as_str()),
        SortField::Born => a.born.cmp(&b.born),
        SortField::Died => a.died.cmp(&b.died),
    }
}

fn slugs(people: &[&Person]) -> Vec<String> {
    people.iter().map(|person| person.slug.clone()).collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn filter_is_an_ordered_subset(people in people_strategy(), view in view_strategy()) {
        let filtered = filter_people(&people, &view);
        let mut cursor = people.iter();
        for person in &filtered {
            prop_assert!(cursor.any(|candidate| std::ptr::eq(candidate, *person)));
        }
    }

    #[test]
    fn filter_is_idempotent(people in people_strategy(), view in view_strategy()) {
        let once = filter_people(&people, &view)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        let twice = filter_people(&once, &view);
        prop_assert_eq!(slugs(&twice), once.iter().map(|p| p.slug.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn sort_is_a_stable_permutation(people in people_strategy(), view in view_strategy()) {
        let refs = people.iter().collect::<Vec<_>>();
        let sorted = sort_people(&refs, view.sort, view.order);

        let mut before = slugs(&refs);
        let mut after = slugs(&sorted);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);

        if let Some(field) = view.sort {
            for pair in sorted.windows(2) {
                let ordering = sort_key_cmp(pair[0], pair[1], field);
                match view.order {
                    SortOrder::Asc => prop_assert_ne!(ordering, Ordering::Greater),
                    SortOrder::Desc => prop_assert_ne!(ordering, Ordering::Less),
                }
                if ordering == Ordering::Equal {
                    let first = people.iter().position(|p| p.slug == pair[0].slug);
                    let second = people.iter().position(|p| p.slug == pair[1].slug);
                    prop_assert!(first < second);
                }
            }
        }
    }

    #[test]
    fn descending_reverses_ascending_for_distinct_keys(
        births in proptest::collection::btree_set(1500_i32..2000, 0..20)
    ) {
        let people = births
            .iter()
            .rev()
            .enumerate()
            .map(|(i, born)| Person::new(format!("p-{i}"), format!("P{i}"), Sex::Male, *born, *born + 1))
            .collect::<Vec<_>>();
        let refs = people.iter().collect::<Vec<_>>();
        let asc = sort_people(&refs, Some(SortField::Born), SortOrder::Asc);
        let desc = sort_people(&asc, Some(SortField::Born), SortOrder::Desc);
        let mut reversed = slugs(&asc);
        reversed.reverse();
        prop_assert_eq!(slugs(&desc), reversed);
    }

    #[test]
    fn parent_resolution_ignores_the_view(
        people in people_strategy(),
        view in view_strategy(),
        name in 0..NAMES.len()
    ) {
        let name = NAMES[name];
        let expected = people.iter().find(|person| person.name == name).map(|p| p.slug.clone());
        let _visible = visible_people(&people, &view);
        let resolved = resolve_parent_link(name, &people).map(|p| p.slug.clone());
        prop_assert_eq!(resolved, expected);
    }
}

fn anna_and_bob() -> Vec<Person> {
    vec![
        Person::new("a", "Anna", Sex::Female, 1850, 1900),
        Person::new("b", "Bob", Sex::Male, 1920, 1980),
    ]
}

#[test]
fn sex_filter_keeps_only_matching_records() {
    let people = anna_and_bob();
    let filtered = filter_people(&people, &ViewState::decode("sex=f"));
    assert_eq!(slugs(&filtered), vec!["a"]);
}

#[test]
fn text_filter_is_case_insensitive_substring() {
    let people = anna_and_bob();
    let filtered = filter_people(&people, &ViewState::decode("query=bo"));
    assert_eq!(slugs(&filtered), vec!["b"]);
}

#[test]
fn born_descending_orders_newest_first() {
    let people = anna_and_bob();
    let visible = visible_people(&people, &ViewState::decode("sort=born&order=desc"));
    assert_eq!(slugs(&visible), vec!["b", "a"]);
}

#[test]
fn century_boundary_record_matches_both_centuries() {
    let people = vec![Person::new("edge", "Edge", Sex::Male, 1599, 1605)];
    assert_eq!(filter_people(&people, &ViewState::decode("centuries=16")).len(), 1);
    assert_eq!(filter_people(&people, &ViewState::decode("centuries=17")).len(), 1);
    assert!(filter_people(&people, &ViewState::decode("centuries=18")).is_empty());
}

#[test]
fn name_sort_is_case_insensitive() {
    let people = vec![
        Person::new("z", "zoe", Sex::Female, 1900, 1950),
        Person::new("b", "Bob", Sex::Male, 1900, 1950),
        Person::new("a", "adam", Sex::Male, 1900, 1950),
    ];
    let visible = visible_people(&people, &ViewState::decode("sort=name"));
    assert_eq!(slugs(&visible), vec!["a", "b", "z"]);
}

#[test]
fn sex_sort_groups_records_in_both_directions() {
    let people = vec![
        Person::new("m1", "Karl", Sex::Male, 1800, 1850),
        Person::new("f1", "Jane", Sex::Female, 1810, 1860),
        Person::new("m2", "Bob", Sex::Male, 1820, 1870),
        Person::new("f2", "Anna", Sex::Female, 1830, 1880),
    ];
    let asc = visible_people(&people, &ViewState::decode("sort=sex"));
    assert_eq!(slugs(&asc), vec!["f1", "f2", "m1", "m2"]);

    let desc = visible_people(&people, &ViewState::decode("sort=sex&order=desc"));
    assert_eq!(slugs(&desc), vec!["m1", "m2", "f1", "f2"]);
}

#[test]
fn name_sort_places_accented_names_with_their_base_letter() {
    let people = vec![
        Person::new("zoe", "Zoe", Sex::Female, 1900, 1950),
        Person::new("emile", "Émile", Sex::Male, 1900, 1950),
        Person::new("oystein", "Øystein", Sex::Male, 1900, 1950),
        Person::new("edgar", "Edgar", Sex::Male, 1900, 1950),
        Person::new("bob", "Bob", Sex::Male, 1900, 1950),
    ];
    let visible = visible_people(&people, &ViewState::decode("sort=name"));
    assert_eq!(slugs(&visible), vec!["bob", "edgar", "emile", "oystein", "zoe"]);

    let two = vec![
        Person::new("zoe", "Zoe", Sex::Female, 1900, 1950),
        Person::new("emile", "Émile", Sex::Male, 1900, 1950),
    ];
    let visible = visible_people(&two, &ViewState::decode("sort=name"));
    assert_eq!(slugs(&visible), vec!["emile", "zoe"]);
}

#[test]
fn century_filter_handles_extreme_years() {
    let people = vec![
        Person::new("min", "Min", Sex::Male, i32::MIN, 0),
        Person::new("max", "Max", Sex::Male, 1990, i32::MAX),
    ];
    assert!(filter_people(&people, &ViewState::decode("centuries=16")).is_empty());
    let twentieth = filter_people(&people, &ViewState::decode("centuries=20"));
    assert_eq!(slugs(&twentieth), vec!["max"]);
}
