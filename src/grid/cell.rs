// src/grid/cell.rs

use crate::types::HexCoordinates;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fully resolved cell stored in a [`crate::HexGrid`].
///
/// Cells are immutable value snapshots: grid queries hand out clones or
/// shared borrows, and the only way to change a stored cell is through the
/// grid's own update operations. `P` is the caller-supplied custom property
/// schema; this crate never inspects it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell<P = ()> {
  /// Canonical identity, the `"q,r,s"` encoding of `coords`.
  pub id: String,
  /// Cube coordinates of the cell.
  pub coords: HexCoordinates,
  /// World-height of the cell surface.
  pub elevation: f64,
  /// Cost of entering the cell. Stored for consumers; never interpreted
  /// here.
  pub movement_cost: f64,
  /// Whether the cell blocks movement entirely.
  pub is_impassable: bool,
  /// Opaque caller-defined payload.
  pub custom_props: P,
}

/// Input shape for cell creation.
///
/// Only the axial pair is required. `s`, when supplied, is validated against
/// the cube invariant; every other unset field resolves against the grid's
/// [`GridDefaults`] at insert time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
  feature = "serde",
  serde(bound(serialize = "P: Serialize", deserialize = "P: Deserialize<'de>"))
)]
pub struct CellDefinition<P = ()> {
  /// Q component (required).
  pub q: i32,
  /// R component (required).
  pub r: i32,
  /// Optional explicit S component; must equal `-q - r` when present.
  #[cfg_attr(feature = "serde", serde(default))]
  pub s: Option<i32>,
  /// Elevation override.
  #[cfg_attr(feature = "serde", serde(default))]
  pub elevation: Option<f64>,
  /// Movement cost override.
  #[cfg_attr(feature = "serde", serde(default))]
  pub movement_cost: Option<f64>,
  /// Impassability override.
  #[cfg_attr(feature = "serde", serde(default))]
  pub is_impassable: Option<bool>,
  /// Custom property override.
  #[cfg_attr(feature = "serde", serde(default))]
  pub custom_props: Option<P>,
}

impl<P> CellDefinition<P> {
  /// A definition at axial `(q, r)` with every optional field unset.
  #[must_use]
  pub fn new(q: i32, r: i32) -> Self {
    CellDefinition {
      q,
      r,
      s: None,
      elevation: None,
      movement_cost: None,
      is_impassable: None,
      custom_props: None,
    }
  }
}

impl<P> Default for CellDefinition<P> {
  fn default() -> Self {
    CellDefinition::new(0, 0)
  }
}

/// Partial update applied over an existing cell's fields.
///
/// Unset fields keep their current values. Coordinates (and therefore
/// identity) cannot be patched; move a cell by removing and re-adding it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellPatch<P = ()> {
  /// New elevation, if set.
  #[cfg_attr(feature = "serde", serde(default))]
  pub elevation: Option<f64>,
  /// New movement cost, if set.
  #[cfg_attr(feature = "serde", serde(default))]
  pub movement_cost: Option<f64>,
  /// New impassability, if set.
  #[cfg_attr(feature = "serde", serde(default))]
  pub is_impassable: Option<bool>,
  /// New custom properties, if set. Replaced wholesale, never merged.
  #[cfg_attr(feature = "serde", serde(default))]
  pub custom_props: Option<P>,
}

impl<P> Default for CellPatch<P> {
  fn default() -> Self {
    CellPatch {
      elevation: None,
      movement_cost: None,
      is_impassable: None,
      custom_props: None,
    }
  }
}

/// Grid-level fallback values for unset [`CellDefinition`] fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridDefaults<P = ()> {
  /// Default elevation.
  pub elevation: f64,
  /// Default movement cost.
  pub movement_cost: f64,
  /// Default impassability.
  pub is_impassable: bool,
  /// Default custom properties.
  pub custom_props: P,
}

impl<P: Default> Default for GridDefaults<P> {
  fn default() -> Self {
    GridDefaults {
      elevation: 0.0,
      movement_cost: 1.0,
      is_impassable: false,
      custom_props: P::default(),
    }
  }
}

/// Bulk-load configuration shape consumed by map and scenario loaders.
///
/// This crate owns no on-disk format; serialization of this shape is the
/// loading collaborator's responsibility (enable the `serde` feature).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapDefinition<P = ()> {
  /// Display name of the map.
  pub name: String,
  /// Defaults applied to every cell definition.
  pub defaults: GridDefaults<P>,
  /// The cells to insert, in order.
  pub cells: Vec<CellDefinition<P>>,
}
