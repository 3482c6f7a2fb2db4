// src/coords/axial.rs

use crate::types::{Direction, HexCoordinates};

/// Axial `(dq, dr)` offsets to the six neighbors of a cell, indexed by
/// [`Direction`] discriminant.
///
/// The rotational order matches the `Direction` enum; callers that consume
/// neighbors ordinally (boundary faces, face geometry) rely on it.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [
    ( 0, -1), // North
    ( 1, -1), // Northeast
    ( 1,  0), // Southeast
    ( 0,  1), // South
    (-1,  1), // Southwest
    (-1,  0), // Northwest
];

/// Converts axial coordinates to cube coordinates by deriving `s = -q - r`.
///
/// Total function; every axial pair maps to a valid cube coordinate.
#[inline]
#[must_use]
pub fn axial_to_cubic(q: i32, r: i32) -> HexCoordinates {
  HexCoordinates { q, r, s: -q - r }
}

/// Whether `coords` satisfies the cube-coordinate invariant `q + r + s == 0`.
///
/// The check is exact. Coordinates reconstructed through lossy arithmetic
/// that land off by one are rejected rather than tolerated.
#[inline]
#[must_use]
pub fn is_valid_hex_coordinate(coords: &HexCoordinates) -> bool {
  i64::from(coords.q) + i64::from(coords.r) + i64::from(coords.s) == 0
}

/// The coordinate of the neighbor across the given face.
///
/// Pure coordinate arithmetic; does not consult any grid, so the result may
/// name a cell that does not exist.
#[inline]
#[must_use]
pub fn neighbor_coordinate(origin: &HexCoordinates, direction: Direction) -> HexCoordinates {
  let (dq, dr) = NEIGHBOR_OFFSETS[direction as usize];
  axial_to_cubic(origin.q.saturating_add(dq), origin.r.saturating_add(dr))
}

/// All six neighbor coordinates of the cell at axial `(q, r)`, in
/// [`Direction`] discriminant order.
#[inline]
#[must_use]
pub fn neighbor_coordinates(q: i32, r: i32) -> [HexCoordinates; 6] {
  let origin = axial_to_cubic(q, r);
  Direction::ALL.map(|direction| neighbor_coordinate(&origin, direction))
}
