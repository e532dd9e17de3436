use std::fs;

use adventure_core::catalog::{Difficulty, EntertainmentKind, Genre};
use adventure_core::planner::{load_planner, CatalogFile, ConfigError, TripConfig, SAMPLING_STREAM};
use adventure_core::selection::{FixedOrder, RngSource};
use adventure_core::types::PlanError;
use tempfile::tempdir;

const CATALOG_JSON: &str = r#"{
  "trip": { "total_budget": 5000, "return_cost": 500, "max_destinations": 3, "seed": 11 },
  "general_options": [
    { "name": "Horseback riding", "cost": 60, "kind": "activity", "difficulty": "hard", "weather_conditions": "No heavy rain" },
    { "name": "MoMA", "cost": 12, "kind": "arts", "teaser": "Is fashion modern?" },
    { "name": "Rissotto and Pizza", "cost": 60, "kind": "gastronomy", "cuisine": "Italian", "min_people": 4 }
  ],
  "destinations": [
    { "name": "Paris", "cost": 1200 },
    { "name": "Rome", "cost": 1050, "entertainment_options": [] },
    { "name": "Lisbon", "cost": 700, "entertainment_options": [
      { "name": "Fado night", "cost": 35, "kind": "arts", "genre": "historical", "location": "Alfama" }
    ] }
  ]
}"#;

#[test]
fn catalog_file_parses_all_kinds() {
    let catalog = CatalogFile::from_json_str(CATALOG_JSON).unwrap();

    assert_eq!(catalog.trip.total_budget, 5000.0);
    assert_eq!(catalog.trip.max_destinations, Some(3));
    assert_eq!(catalog.trip.seed, Some(11));
    assert_eq!(catalog.general_options.len(), 3);

    assert!(matches!(
        catalog.general_options[0].kind,
        EntertainmentKind::Activity { difficulty: Difficulty::Hard, .. }
    ));
    assert!(matches!(
        catalog.general_options[1].kind,
        EntertainmentKind::Arts { genre: Genre::Modern, age_limit: 0, .. }
    ));
    assert!(matches!(
        catalog.general_options[2].kind,
        EntertainmentKind::Gastronomy { min_people: 4, .. }
    ));

    assert!(catalog.destinations[0].entertainment_options.is_none());
    assert_eq!(catalog.destinations[1].entertainment_options, Some(Vec::new()));
}

#[test]
fn missing_trip_section_uses_defaults() {
    let catalog = CatalogFile::from_json_str(r#"{ "destinations": [] }"#).unwrap();
    assert_eq!(catalog.trip, TripConfig::v0());
    assert!(catalog.general_options.is_empty());
}

#[test]
fn explicit_null_removes_the_destination_cap() {
    let json = r#"{ "trip": { "max_destinations": null }, "destinations": [] }"#;
    let catalog = CatalogFile::from_json_str(json).unwrap();

    assert_eq!(catalog.trip.max_destinations, None);
    assert_eq!(catalog.trip.total_budget, 10_000.0);
    assert_eq!(catalog.trip.return_cost, 800.0);
}

#[test]
fn only_unlisted_destinations_are_sampled() {
    let catalog = CatalogFile::from_json_str(CATALOG_JSON).unwrap();
    let (_, destinations) = catalog.into_destinations(&mut FixedOrder);

    // FixedOrder samples every general option, in order.
    let paris: Vec<&str> = destinations[0].entertainment_options.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(paris, vec!["Horseback riding", "MoMA", "Rissotto and Pizza"]);
    assert!(destinations[1].entertainment_options.is_empty());
    assert_eq!(destinations[2].entertainment_options.len(), 1);
    assert_eq!(destinations[2].entertainment_options[0].location, "Alfama");
}

#[test]
fn sampled_options_are_drawn_from_general_options() {
    for seed in 0..50 {
        let catalog = CatalogFile::from_json_str(CATALOG_JSON).unwrap();
        let general = catalog.general_options.clone();
        let (_, destinations) = catalog.into_destinations(&mut RngSource::from_seed(seed));

        let paris = &destinations[0].entertainment_options;
        assert!(!paris.is_empty());
        assert!(paris.iter().all(|option| general.contains(option)));
    }
}

#[test]
fn load_planner_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, CATALOG_JSON).unwrap();

    let planner = load_planner(&path).unwrap();
    assert_eq!(planner.destinations().len(), 3);
    assert_eq!(planner.config().available_budget(), 4500.0);

    let plan = planner.plan();
    assert_eq!(plan.summary.seed, Some(11));
    assert!(plan.total_cost() <= 5000.0);
    assert!(plan.visits.len() <= 3);
}

#[test]
fn seeded_catalog_loads_identically() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, CATALOG_JSON).unwrap();

    let a = load_planner(&path).unwrap();
    let b = load_planner(&path).unwrap();

    assert_eq!(a.destinations(), b.destinations());
    assert_eq!(a.catalog_version(), b.catalog_version());
}

#[test]
fn sampling_uses_its_own_stream() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, CATALOG_JSON).unwrap();

    let planner = load_planner(&path).unwrap();
    let (_, expected) = CatalogFile::from_json_str(CATALOG_JSON)
        .unwrap()
        .into_destinations(&mut RngSource::from_seed_stream(11, SAMPLING_STREAM));

    assert_eq!(planner.destinations(), expected.as_slice());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_planner(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = CatalogFile::from_json_str(r#"{ "destinations": [ { "name": "Paris" } ] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Serialization(_)));
}

#[test]
fn negative_cost_in_file_is_invalid() {
    let json = r#"{ "destinations": [ { "name": "Paris", "cost": -5, "entertainment_options": [] } ] }"#;
    let catalog = CatalogFile::from_json_str(json).unwrap();

    let err = catalog.into_planner(&mut FixedOrder).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(PlanError::InvalidCost { .. })));
    assert!(err.to_string().contains("Paris"));
}
