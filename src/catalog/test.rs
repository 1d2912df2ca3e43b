use crate::catalog::{Catalog, StaticCatalog};
use crate::error::CatalogError;
use crate::geo::{Coordinate, Location, LocationId};

const CAMPUS_JSON: &str = include_str!("../../fixtures/campus.json");

#[test_log::test]
fn campus_has_sixteen_unique_locations() {
    let catalog = StaticCatalog::campus();
    assert_eq!(catalog.len(), 16);

    let first = catalog.location(LocationId(1)).expect("location 1 exists");
    assert_eq!(first.name, "水院实验楼");
    assert_eq!(first.coordinate(), Coordinate::new(405.0, 125.0));

    assert!(catalog.contains(LocationId(16)));
    assert!(!catalog.contains(LocationId(9999)));
}

#[test_log::test]
fn json_fixture_matches_builtin_campus() {
    let parsed =
        StaticCatalog::from_json_reader(CAMPUS_JSON.as_bytes()).expect("fixture should parse");

    assert_eq!(parsed, StaticCatalog::campus());
}

#[test_log::test]
fn rejects_empty_catalog() {
    let err = StaticCatalog::from_json_reader("[]".as_bytes()).unwrap_err();
    assert!(matches!(err, CatalogError::Empty));
}

#[test_log::test]
fn rejects_duplicate_ids() {
    let err = StaticCatalog::new(vec![
        Location::new(1, "a", 0.0, 0.0),
        Location::new(2, "b", 1.0, 0.0),
        Location::new(1, "c", 2.0, 0.0),
    ])
    .unwrap_err();

    assert!(matches!(err, CatalogError::DuplicateId(LocationId(1))));
}

#[test_log::test]
fn rejects_malformed_json() {
    let err = StaticCatalog::from_json_reader(r#"[{"id": "one"}]"#.as_bytes()).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn slices_are_catalogs() {
    let locations = vec![Location::new(7, "only", 1.0, 2.0)];
    assert_eq!(locations.location(LocationId(7)).map(|l| l.x), Some(1.0));
    assert!(locations.as_slice().location(LocationId(8)).is_none());
}
