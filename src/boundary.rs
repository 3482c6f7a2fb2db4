// src/boundary.rs

//! Exterior-boundary face detection over an arbitrary cell selection.

use std::collections::HashSet;

use crate::coords::{create_cell_id_cubic, neighbor_coordinate};
use crate::grid::Cell;
use crate::types::{BoundaryMap, Direction, DirectionSet};

/// Computes, per selected cell, the faces that form the selection's
/// perimeter.
///
/// A face is a boundary face when the neighbor across it is not part of the
/// selection. Whether the owning grid stores a cell at that coordinate is
/// irrelevant, so selections spanning holes, disconnected islands, and ids
/// absent from any grid all work. Membership is by cell identity:
/// structurally equal coordinates are the same cell regardless of which
/// `Cell` value carried them.
///
/// Directions are tested in [`Direction`] discriminant order, the order
/// downstream face-vertex lookups consume. Every selected cell gets an
/// entry; a cell whose six neighbors are all selected maps to an empty
/// [`DirectionSet`]. An empty selection returns an empty map without doing
/// any coordinate work.
///
/// Resolving ids back to full cells for geometry generation stays with the
/// caller (via [`crate::HexGrid::get_cell_by_id`]); a stale id there is
/// skipped by that layer, never an error here.
#[must_use]
pub fn find_boundary_faces<P>(selection: &[Cell<P>]) -> BoundaryMap {
  if selection.is_empty() {
    return BoundaryMap::new();
  }

  let members: HashSet<&str> = selection.iter().map(|cell| cell.id.as_str()).collect();

  let mut boundary = BoundaryMap::with_capacity(selection.len());
  for cell in selection {
    let mut faces = DirectionSet::EMPTY;
    for direction in Direction::ALL {
      let neighbor = neighbor_coordinate(&cell.coords, direction);
      if !members.contains(create_cell_id_cubic(&neighbor).as_str()) {
        faces.insert(direction);
      }
    }
    boundary.insert(cell.id.clone(), faces);
  }
  boundary
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::coords::{axial_to_cubic, create_cell_id};

  fn selection_cell(q: i32, r: i32) -> Cell {
    Cell {
      id: create_cell_id(q, r),
      coords: axial_to_cubic(q, r),
      elevation: 0.0,
      movement_cost: 1.0,
      is_impassable: false,
      custom_props: (),
    }
  }

  #[test]
  fn test_empty_selection_is_empty_map() {
    let boundary = find_boundary_faces::<()>(&[]);
    assert!(boundary.is_empty());
  }

  #[test]
  fn test_membership_is_by_identity_not_value() {
    // Structurally equal coordinates carried by distinct Cell values (with
    // different payload fields) still count as one selected cell.
    let mut duplicate = selection_cell(0, 0);
    duplicate.elevation = 9.0;
    let boundary = find_boundary_faces(&[selection_cell(0, 0), duplicate]);
    assert_eq!(boundary.len(), 1);
    assert_eq!(boundary[&create_cell_id(0, 0)], DirectionSet::ALL);
  }

  #[test]
  fn test_selection_absent_from_any_grid_is_tolerated() {
    let boundary = find_boundary_faces(&[selection_cell(100, -250)]);
    assert_eq!(boundary.len(), 1);
    assert_eq!(boundary[&create_cell_id(100, -250)].len(), 6);
  }
}
