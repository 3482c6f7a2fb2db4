// src/coords/cell_id.rs

use crate::coords::axial::{axial_to_cubic, is_valid_hex_coordinate};
use crate::types::{HexCoordinates, HexGridError};

/// Derives the canonical cell id for the axial coordinates `(q, r)`.
///
/// `s` is computed as `-q - r`, so the result is always a valid identity.
#[inline]
#[must_use]
pub fn create_cell_id(q: i32, r: i32) -> String {
  create_cell_id_cubic(&axial_to_cubic(q, r))
}

/// The canonical `"q,r,s"` encoding of a cube coordinate.
///
/// This string is the sole key space of [`crate::HexGrid`]: two cells are
/// the same cell exactly when their ids are equal. The encoding is stable
/// and round-trips through [`parse_cell_id`].
#[inline]
#[must_use]
pub fn create_cell_id_cubic(coords: &HexCoordinates) -> String {
  format!("{},{},{}", coords.q, coords.r, coords.s)
}

/// Parses a canonical cell id back into cube coordinates.
///
/// Fails with [`HexGridError::InvalidCellId`] on malformed text and with
/// [`HexGridError::InvalidCoordinate`] when the decoded triple breaks the
/// `q + r + s == 0` invariant.
pub fn parse_cell_id(id: &str) -> Result<HexCoordinates, HexGridError> {
  let mut parts = id.split(',');
  let q = parse_component(parts.next(), id)?;
  let r = parse_component(parts.next(), id)?;
  let s = parse_component(parts.next(), id)?;
  if parts.next().is_some() {
    return Err(HexGridError::InvalidCellId { id: id.to_owned() });
  }

  let coords = HexCoordinates { q, r, s };
  if !is_valid_hex_coordinate(&coords) {
    return Err(HexGridError::InvalidCoordinate { q, r, s });
  }
  Ok(coords)
}

fn parse_component(part: Option<&str>, id: &str) -> Result<i32, HexGridError> {
  part
    .and_then(|text| text.parse::<i32>().ok())
    .ok_or_else(|| HexGridError::InvalidCellId { id: id.to_owned() })
}
