use super::*;

fn school(id: i64, name: &str, city: &str, postcode: &str) -> School {
    School {
        id,
        name: name.to_owned(),
        address: "1 High Street".to_owned(),
        city: city.to_owned(),
        postcode: postcode.to_owned(),
        phone: None,
        email: None,
        lat: 51.5,
        lng: -0.1,
    }
}

fn sample() -> Vec<School> {
    vec![
        school(1, "Northgate Academy", "Leeds", "LS1 4AP"),
        school(2, "Riverside Primary", "York", "YO1 7HH"),
        school(3, "Southfield High", "Leeds", "LS11 8EE"),
    ]
}

// =============================================================
// filter_schools
// =============================================================

#[test]
fn empty_query_returns_everything() {
    let items = sample();
    assert_eq!(filter_schools(&items, ""), items);
}

#[test]
fn filter_matches_name_case_insensitively() {
    let items = sample();
    let hits = filter_schools(&items, "riverside");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn filter_matches_city_and_postcode() {
    let items = sample();

    let by_city = filter_schools(&items, "Leeds");
    assert_eq!(by_city.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);

    let by_postcode = filter_schools(&items, "yo1");
    assert_eq!(by_postcode.len(), 1);
    assert_eq!(by_postcode[0].id, 2);
}

#[test]
fn filter_trims_surrounding_whitespace() {
    let items = sample();
    let hits = filter_schools(&items, "  southfield  ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 3);
}

#[test]
fn filter_with_no_match_is_empty() {
    let items = sample();
    assert!(filter_schools(&items, "zzz").is_empty());
}

// =============================================================
// SchoolsState defaults
// =============================================================

#[test]
fn schools_state_default_is_empty_and_unloaded() {
    let state = SchoolsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.loaded);
}
