use super::*;

fn school(id: i64, name: &str) -> School {
    School {
        id,
        name: name.to_owned(),
        address: "1 High Street".to_owned(),
        city: "Leeds".to_owned(),
        postcode: "LS1 4AP".to_owned(),
        phone: None,
        email: None,
        lat: 53.8,
        lng: -1.5,
    }
}

// =============================================================
// Stop selection
// =============================================================

#[test]
fn toggle_adds_then_removes() {
    let mut planner = PlannerState::default();
    let a = school(1, "Northgate");

    planner.toggle(&a);
    assert!(planner.is_selected(1));
    assert_eq!(planner.stops.len(), 1);

    planner.toggle(&a);
    assert!(!planner.is_selected(1));
    assert!(planner.stops.is_empty());
}

#[test]
fn toggle_keeps_other_stops() {
    let mut planner = PlannerState::default();
    planner.toggle(&school(1, "Northgate"));
    planner.toggle(&school(2, "Riverside"));
    planner.toggle(&school(3, "Southfield"));

    planner.toggle(&school(2, "Riverside"));

    assert_eq!(planner.stops.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);
}

// =============================================================
// Plan application
// =============================================================

#[test]
fn apply_plan_reorders_to_backend_order() {
    let mut planner = PlannerState::default();
    planner.toggle(&school(1, "Northgate"));
    planner.toggle(&school(2, "Riverside"));
    planner.toggle(&school(3, "Southfield"));

    planner.apply_plan(&[3, 1, 2]);

    assert_eq!(planner.stops.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3, 1, 2]);
}

#[test]
fn apply_plan_drops_ids_missing_from_order() {
    let mut planner = PlannerState::default();
    planner.toggle(&school(1, "Northgate"));
    planner.toggle(&school(2, "Riverside"));

    planner.apply_plan(&[2]);

    assert_eq!(planner.stops.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn apply_plan_ignores_unknown_ids() {
    let mut planner = PlannerState::default();
    planner.toggle(&school(1, "Northgate"));
    planner.toggle(&school(2, "Riverside"));

    planner.apply_plan(&[2, 99, 1]);

    assert_eq!(planner.stops.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn clear_empties_stops_and_error() {
    let mut planner = PlannerState::default();
    planner.toggle(&school(1, "Northgate"));
    planner.error = Some("pick at least two stops".to_owned());

    planner.clear();

    assert!(planner.stops.is_empty());
    assert!(planner.error.is_none());
}
