// tests/serde_tests.rs

// Only compile and run these tests if the "serde" feature is enabled.
#![cfg(feature = "serde")]

use xs_hexgrid::*;

#[test]
fn test_hex_coordinates_serde() {
  let coords = HexCoordinates { q: 1, r: 2, s: -3 };
  let serialized = serde_json::to_string(&coords).unwrap();
  assert_eq!(serialized, r#"{"q":1,"r":2,"s":-3}"#);
  let deserialized: HexCoordinates = serde_json::from_str(&serialized).unwrap();
  assert_eq!(coords, deserialized);
}

#[test]
fn test_direction_serde_uses_discriminants() {
  // serde_repr serializes the repr(u8) discriminant directly.
  assert_eq!(serde_json::to_string(&Direction::North).unwrap(), "0");
  assert_eq!(serde_json::to_string(&Direction::Northwest).unwrap(), "5");

  let deserialized: Direction = serde_json::from_str("3").unwrap();
  assert_eq!(deserialized, Direction::South);
  assert!(serde_json::from_str::<Direction>("6").is_err());
}

#[test]
fn test_direction_set_serde_is_the_bitmask() {
  let set: DirectionSet = [Direction::North, Direction::South].into_iter().collect();
  let serialized = serde_json::to_string(&set).unwrap();
  assert_eq!(serialized, "9"); // bits 0 and 3

  let deserialized: DirectionSet = serde_json::from_str(&serialized).unwrap();
  assert_eq!(set, deserialized);
}

#[test]
fn test_cell_serde_round_trip() {
  let mut grid: HexGrid<String> = HexGrid::with_defaults(GridDefaults {
    elevation: 0.5,
    movement_cost: 1.0,
    is_impassable: false,
    custom_props: "plain".to_owned(),
  });
  let cell = grid.add_cell(&CellDefinition::new(2, -1)).unwrap();

  let serialized = serde_json::to_string(&cell).unwrap();
  let deserialized: Cell<String> = serde_json::from_str(&serialized).unwrap();
  assert_eq!(cell, deserialized);
}

#[test]
fn test_map_definition_loads_from_json() {
  // The bulk-load collaborator's document shape: per-cell fields are
  // optional and fall back to the map defaults.
  let document = r#"{
    "name": "river crossing",
    "defaults": {
      "elevation": 1.0,
      "movement_cost": 1.0,
      "is_impassable": false,
      "custom_props": null
    },
    "cells": [
      { "q": 0, "r": 0 },
      { "q": 1, "r": 0, "elevation": 2.0, "is_impassable": true },
      { "q": 0, "r": 1, "s": -1, "movement_cost": 3.0 }
    ]
  }"#;

  let map: MapDefinition = serde_json::from_str(document).unwrap();
  assert_eq!(map.name, "river crossing");
  assert_eq!(map.cells.len(), 3);

  let grid = HexGrid::from_map_definition(&map).unwrap();
  assert_eq!(grid.len(), 3);
  assert!((grid.get_cell(0, 0).unwrap().elevation - 1.0).abs() < f64::EPSILON);

  let ridge = grid.get_cell(1, 0).unwrap();
  assert!((ridge.elevation - 2.0).abs() < f64::EPSILON);
  assert!(ridge.is_impassable);

  let ford = grid.get_cell(0, 1).unwrap();
  assert_eq!(ford.coords, HexCoordinates { q: 0, r: 1, s: -1 });
  assert!((ford.movement_cost - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_map_definition_with_bad_s_fails_cleanly() {
  let document = r#"{
    "name": "broken",
    "defaults": {
      "elevation": 0.0,
      "movement_cost": 1.0,
      "is_impassable": false,
      "custom_props": null
    },
    "cells": [ { "q": 1, "r": 1, "s": 1 } ]
  }"#;

  let map: MapDefinition = serde_json::from_str(document).unwrap();
  let error = HexGrid::from_map_definition(&map).unwrap_err();
  assert_eq!(error, HexGridError::InvalidCoordinate { q: 1, r: 1, s: 1 });
}
