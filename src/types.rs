//! Core grid data structures.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Cube coordinates identifying a hexagonal cell.
///
/// Every valid coordinate satisfies `q + r + s == 0`; the axial pair
/// `(q, r)` always determines `s = -q - r`. Validity is checked with exact
/// integer equality, never a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HexCoordinates {
  /// Q component (column axis).
  pub q: i32,
  /// R component (row axis).
  pub r: i32,
  /// S component, derived as `-q - r` for valid coordinates.
  pub s: i32,
}

impl HexCoordinates {
  /// The origin cell `(0, 0, 0)`.
  pub const ORIGIN: HexCoordinates = HexCoordinates { q: 0, r: 0, s: 0 };

  /// Grid distance between two cells under the cube metric.
  #[inline]
  #[must_use]
  pub fn distance(&self, other: &HexCoordinates) -> i32 {
    let dq = (self.q - other.q).abs();
    let dr = (self.r - other.r).abs();
    let ds = (self.s - other.s).abs();
    (dq + dr + ds) / 2
  }
}

/// The six faces of a flat-top hexagon, in fixed rotational order.
///
/// The discriminant order is load-bearing: it indexes the neighbor offset
/// table ([`crate::coords::NEIGHBOR_OFFSETS`]) and the face-to-corner
/// mapping ([`crate::projection::face_corner_offsets`]). Downstream
/// consumers read boundary faces ordinally, so the order must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Face on the flat top edge.
  North = 0,
  /// Upper-right face.
  Northeast = 1,
  /// Lower-right face.
  Southeast = 2,
  /// Face on the flat bottom edge.
  South = 3,
  /// Lower-left face.
  Southwest = 4,
  /// Upper-left face.
  Northwest = 5,
}

impl Direction {
  /// All six directions in discriminant order.
  pub const ALL: [Direction; 6] = [
    Direction::North,
    Direction::Northeast,
    Direction::Southeast,
    Direction::South,
    Direction::Southwest,
    Direction::Northwest,
  ];

  /// The face on the opposite side of the hexagon.
  #[inline]
  #[must_use]
  pub fn opposite(self) -> Direction {
    Direction::ALL[(self as usize + 3) % 6]
  }

  /// Looks up a direction by its ordinal, `None` when out of range.
  #[inline]
  #[must_use]
  pub fn from_index(index: usize) -> Option<Direction> {
    Direction::ALL.get(index).copied()
  }
}

/// A compact set of [`Direction`] values, packed into a bitmask.
///
/// Iteration yields directions in discriminant order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectionSet(u8);

impl DirectionSet {
  /// The empty set.
  pub const EMPTY: DirectionSet = DirectionSet(0);
  /// All six faces.
  pub const ALL: DirectionSet = DirectionSet(0b0011_1111);

  /// Adds a direction to the set.
  #[inline]
  pub fn insert(&mut self, direction: Direction) {
    self.0 |= 1 << direction as u8;
  }

  /// Removes a direction from the set.
  #[inline]
  pub fn remove(&mut self, direction: Direction) {
    self.0 &= !(1 << direction as u8);
  }

  /// Whether the set contains `direction`.
  #[inline]
  #[must_use]
  pub fn contains(self, direction: Direction) -> bool {
    self.0 & (1 << direction as u8) != 0
  }

  /// Number of directions in the set.
  #[inline]
  #[must_use]
  pub fn len(self) -> usize {
    self.0.count_ones() as usize
  }

  /// Whether the set is empty.
  #[inline]
  #[must_use]
  pub fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Iterates the contained directions in discriminant order.
  pub fn iter(self) -> impl Iterator<Item = Direction> {
    Direction::ALL.into_iter().filter(move |d| self.contains(*d))
  }
}

impl FromIterator<Direction> for DirectionSet {
  fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
    let mut set = DirectionSet::EMPTY;
    for direction in iter {
      set.insert(direction);
    }
    set
  }
}

/// Ground-plane world position of a cell center or corner.
///
/// Height (the world y axis) comes from cell elevation and is applied by the
/// rendering layer, not by this crate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldPoint {
  /// X component.
  pub x: f64,
  /// Z component (depth; rows grow toward positive z).
  pub z: f64,
}

/// Axis-aligned bounds of a grid across all three cube axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridBounds {
  /// Minimum q across all stored cells.
  pub min_q: i32,
  /// Maximum q across all stored cells.
  pub max_q: i32,
  /// Minimum r across all stored cells.
  pub min_r: i32,
  /// Maximum r across all stored cells.
  pub max_r: i32,
  /// Minimum s across all stored cells.
  pub min_s: i32,
  /// Maximum s across all stored cells.
  pub max_s: i32,
}

/// Boundary faces per selected cell, keyed by canonical cell id.
///
/// Produced by [`crate::boundary::find_boundary_faces`]; cells fully
/// enclosed by the selection map to an empty [`DirectionSet`].
pub type BoundaryMap = HashMap<String, DirectionSet>;

/// Errors surfaced by grid mutation and id parsing.
///
/// Absent cells are never errors; lookups return `Option` and removals
/// return `bool`. Every variant here reflects a caller bug, so nothing is
/// retried or silently recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HexGridError {
  /// An explicitly supplied `s` component broke the `q + r + s == 0`
  /// invariant.
  #[error("invalid cube coordinate ({q}, {r}, {s}): q + r + s must equal 0")]
  InvalidCoordinate {
    /// Q component as supplied.
    q: i32,
    /// R component as supplied.
    r: i32,
    /// S component as supplied.
    s: i32,
  },
  /// An insert targeted an identity that is already occupied.
  #[error("cell already exists at {id}")]
  DuplicateCell {
    /// Canonical id of the occupied cell.
    id: String,
  },
  /// A cell id string did not match the canonical `q,r,s` encoding.
  #[error("malformed cell id `{id}`")]
  InvalidCellId {
    /// The rejected input.
    id: String,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_direction_opposites() {
    assert_eq!(Direction::North.opposite(), Direction::South);
    assert_eq!(Direction::Northeast.opposite(), Direction::Southwest);
    assert_eq!(Direction::Southeast.opposite(), Direction::Northwest);
    for direction in Direction::ALL {
      assert_eq!(direction.opposite().opposite(), direction);
    }
  }

  #[test]
  fn test_direction_from_index() {
    assert_eq!(Direction::from_index(0), Some(Direction::North));
    assert_eq!(Direction::from_index(5), Some(Direction::Northwest));
    assert_eq!(Direction::from_index(6), None);
  }

  #[test]
  fn test_direction_set_insert_contains() {
    let mut set = DirectionSet::EMPTY;
    assert!(set.is_empty());

    set.insert(Direction::North);
    set.insert(Direction::South);
    assert_eq!(set.len(), 2);
    assert!(set.contains(Direction::North));
    assert!(set.contains(Direction::South));
    assert!(!set.contains(Direction::Northeast));

    set.remove(Direction::North);
    assert!(!set.contains(Direction::North));
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn test_direction_set_iterates_in_enum_order() {
    let set: DirectionSet = [Direction::Southwest, Direction::North, Direction::Southeast]
      .into_iter()
      .collect();
    let order: Vec<Direction> = set.iter().collect();
    assert_eq!(
      order,
      vec![Direction::North, Direction::Southeast, Direction::Southwest]
    );
  }

  #[test]
  fn test_direction_set_all() {
    assert_eq!(DirectionSet::ALL.len(), 6);
    for direction in Direction::ALL {
      assert!(DirectionSet::ALL.contains(direction));
    }
  }

  #[test]
  fn test_cube_distance() {
    let origin = HexCoordinates::ORIGIN;
    let adjacent = HexCoordinates { q: 1, r: 0, s: -1 };
    let far = HexCoordinates { q: 3, r: -1, s: -2 };
    assert_eq!(origin.distance(&origin), 0);
    assert_eq!(origin.distance(&adjacent), 1);
    assert_eq!(adjacent.distance(&origin), 1);
    assert_eq!(origin.distance(&far), 3);
  }
}
