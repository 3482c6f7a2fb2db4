// src/projection.rs

//! Bidirectional mapping between hex coordinates and world positions.
//!
//! Fixed flat-top layout with unit hex size. The forward map places cell
//! centers; the inverse quantizes an arbitrary ground-plane point (a
//! pointer-ray hit) back to the containing cell via cube rounding.

use crate::constants::{M_ONETHIRD, M_SQRT3, M_SQRT3_2, M_SQRT3_3, M_TWOTHIRDS, ROW_PITCH};
use crate::types::{Direction, HexCoordinates, WorldPoint};

/// Unit-hex corner offsets from a cell center, in rotational order.
///
/// Corner `i` and corner `(i + 5) % 6` bound the face of
/// [`Direction`] discriminant `i`; see [`face_corner_offsets`].
#[rustfmt::skip]
pub const CORNER_OFFSETS: [WorldPoint; 6] = [
    WorldPoint { x: 0.0,        z: -1.0 },
    WorldPoint { x: M_SQRT3_2,  z: -0.5 },
    WorldPoint { x: M_SQRT3_2,  z:  0.5 },
    WorldPoint { x: 0.0,        z:  1.0 },
    WorldPoint { x: -M_SQRT3_2, z:  0.5 },
    WorldPoint { x: -M_SQRT3_2, z: -0.5 },
];

/// World position of a cell center.
///
/// `x = sqrt(3) * q + sqrt(3)/2 * r`, `z = 1.5 * r`. Height (world y) is
/// the cell's elevation, applied by the rendering layer. Total and pure.
#[inline]
#[must_use]
pub fn hex_to_world(coords: &HexCoordinates) -> WorldPoint {
  WorldPoint {
    x: M_SQRT3 * f64::from(coords.q) + M_SQRT3_2 * f64::from(coords.r),
    z: ROW_PITCH * f64::from(coords.r),
  }
}

/// The cell containing a ground-plane world position.
///
/// Inverts [`hex_to_world`] into fractional cube coordinates
/// (`q = sqrt(3)/3 * x - 1/3 * z`, `r = 2/3 * z`) and quantizes with
/// [`cube_round`]. For any cell center the round trip is exact.
#[inline]
#[must_use]
pub fn world_to_hex(point: &WorldPoint) -> HexCoordinates {
  let q = M_SQRT3_3 * point.x - M_ONETHIRD * point.z;
  let r = M_TWOTHIRDS * point.z;
  cube_round(q, r, -q - r)
}

/// Rounds fractional cube coordinates to the nearest valid cell.
///
/// Each component is rounded independently, then the component with the
/// largest rounding error is recomputed from the other two so the result
/// satisfies `q + r + s == 0`. The branch order is asymmetric: q is
/// recomputed only when its error is strictly largest, and r wins the tie
/// against s. Half-integer inputs land on different cells under any other
/// order.
#[must_use]
pub fn cube_round(q: f64, r: f64, s: f64) -> HexCoordinates {
  let mut rounded_q = q.round();
  let mut rounded_r = r.round();
  let mut rounded_s = s.round();

  let dq = (rounded_q - q).abs();
  let dr = (rounded_r - r).abs();
  let ds = (rounded_s - s).abs();

  if dq > dr && dq > ds {
    rounded_q = -rounded_r - rounded_s;
  } else if dr > ds {
    rounded_r = -rounded_q - rounded_s;
  } else {
    rounded_s = -rounded_q - rounded_r;
  }

  HexCoordinates {
    q: rounded_q as i32,
    r: rounded_r as i32,
    s: rounded_s as i32,
  }
}

/// The two corner offsets bounding the face in the given direction, in
/// rotational order.
///
/// Together with [`hex_to_world`] this is what outline drawing consumes:
/// translate both offsets by the cell center to get the world-space edge of
/// a boundary face.
#[inline]
#[must_use]
pub fn face_corner_offsets(direction: Direction) -> [WorldPoint; 2] {
  let i = direction as usize;
  [CORNER_OFFSETS[(i + 5) % 6], CORNER_OFFSETS[i]]
}
