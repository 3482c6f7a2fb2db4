// src/grid/mod.rs

pub mod cell;

pub use cell::{Cell, CellDefinition, CellPatch, GridDefaults, MapDefinition};

use std::collections::{HashMap, HashSet};

use crate::coords::{
  axial_to_cubic, create_cell_id, create_cell_id_cubic, is_valid_hex_coordinate, neighbor_coordinates,
};
use crate::types::{GridBounds, HexCoordinates, HexGridError};

/// A sparse hexagonal grid keyed by canonical cell id.
///
/// The grid owns its cells: all mutation goes through the CRUD operations
/// here, and enumeration methods return snapshot copies so a caller may
/// iterate while later mutating the grid. Single-threaded by design; a host
/// that introduces concurrency must serialize access externally.
#[derive(Debug, Clone)]
pub struct HexGrid<P = ()> {
  cells: HashMap<String, Cell<P>>,
  defaults: GridDefaults<P>,
}

impl<P: Clone + Default> HexGrid<P> {
  /// An empty grid with default fallbacks (elevation 0.0, movement cost
  /// 1.0, passable).
  #[must_use]
  pub fn new() -> Self {
    HexGrid::with_defaults(GridDefaults::default())
  }
}

impl<P: Clone + Default> Default for HexGrid<P> {
  fn default() -> Self {
    HexGrid::new()
  }
}

impl<P: Clone> HexGrid<P> {
  /// An empty grid with the given fallbacks for unset definition fields.
  #[must_use]
  pub fn with_defaults(defaults: GridDefaults<P>) -> Self {
    HexGrid {
      cells: HashMap::new(),
      defaults,
    }
  }

  /// Builds a grid from a bulk-load map definition.
  ///
  /// Insertion is all-or-nothing, matching [`HexGrid::add_cells`].
  pub fn from_map_definition(map: &MapDefinition<P>) -> Result<Self, HexGridError> {
    let mut grid = HexGrid::with_defaults(map.defaults.clone());
    grid.add_cells(&map.cells)?;
    Ok(grid)
  }

  /// The grid-level defaults supplied at construction.
  #[must_use]
  pub fn defaults(&self) -> &GridDefaults<P> {
    &self.defaults
  }

  /// Resolves a definition into a full cell without touching storage.
  ///
  /// Validates an explicit `s` against the cube invariant and fills unset
  /// fields from the grid defaults.
  fn resolve_definition(&self, definition: &CellDefinition<P>) -> Result<Cell<P>, HexGridError> {
    let coords = match definition.s {
      Some(s) => {
        let coords = HexCoordinates {
          q: definition.q,
          r: definition.r,
          s,
        };
        if !is_valid_hex_coordinate(&coords) {
          return Err(HexGridError::InvalidCoordinate {
            q: definition.q,
            r: definition.r,
            s,
          });
        }
        coords
      }
      None => axial_to_cubic(definition.q, definition.r),
    };

    Ok(Cell {
      id: create_cell_id_cubic(&coords),
      coords,
      elevation: definition.elevation.unwrap_or(self.defaults.elevation),
      movement_cost: definition.movement_cost.unwrap_or(self.defaults.movement_cost),
      is_impassable: definition.is_impassable.unwrap_or(self.defaults.is_impassable),
      custom_props: definition
        .custom_props
        .clone()
        .unwrap_or_else(|| self.defaults.custom_props.clone()),
    })
  }

  /// Inserts a single cell.
  ///
  /// Fails with [`HexGridError::InvalidCoordinate`] when an explicit `s`
  /// breaks the invariant and with [`HexGridError::DuplicateCell`] when the
  /// identity is already occupied; the grid is unchanged on failure.
  /// Returns a snapshot of the inserted cell.
  pub fn add_cell(&mut self, definition: &CellDefinition<P>) -> Result<Cell<P>, HexGridError> {
    let cell = self.resolve_definition(definition)?;
    if self.cells.contains_key(&cell.id) {
      return Err(HexGridError::DuplicateCell { id: cell.id });
    }
    self.cells.insert(cell.id.clone(), cell.clone());
    Ok(cell)
  }

  /// Inserts a batch of cells, all-or-nothing.
  ///
  /// Every definition is validated first: coordinate invariant, collisions
  /// with stored cells, and collisions within the batch itself. Only when
  /// the whole batch is clean does anything get inserted, so a failure
  /// leaves the grid exactly as it was. Results are in input order.
  pub fn add_cells(&mut self, definitions: &[CellDefinition<P>]) -> Result<Vec<Cell<P>>, HexGridError> {
    let mut resolved = Vec::with_capacity(definitions.len());
    let mut batch_ids: HashSet<String> = HashSet::with_capacity(definitions.len());

    for definition in definitions {
      let cell = self.resolve_definition(definition)?;
      if self.cells.contains_key(&cell.id) || !batch_ids.insert(cell.id.clone()) {
        return Err(HexGridError::DuplicateCell { id: cell.id });
      }
      resolved.push(cell);
    }

    for cell in &resolved {
      self.cells.insert(cell.id.clone(), cell.clone());
    }
    Ok(resolved)
  }

  /// The cell at axial `(q, r)`, if present.
  #[must_use]
  pub fn get_cell(&self, q: i32, r: i32) -> Option<&Cell<P>> {
    self.cells.get(&create_cell_id(q, r))
  }

  /// The cell at explicit cube `(q, r, s)`, if present.
  ///
  /// An invariant-breaking triple can never be a stored identity, so it
  /// simply resolves to `None`.
  #[must_use]
  pub fn get_cell_cubic(&self, q: i32, r: i32, s: i32) -> Option<&Cell<P>> {
    self.cells.get(&create_cell_id_cubic(&HexCoordinates { q, r, s }))
  }

  /// The cell at the given cube coordinates, if present.
  #[must_use]
  pub fn get_cell_by_coords(&self, coords: &HexCoordinates) -> Option<&Cell<P>> {
    self.cells.get(&create_cell_id_cubic(coords))
  }

  /// The cell with the given canonical id, if present.
  #[must_use]
  pub fn get_cell_by_id(&self, id: &str) -> Option<&Cell<P>> {
    self.cells.get(id)
  }

  /// Applies a patch to the cell at axial `(q, r)`.
  ///
  /// Fields unset in the patch keep their current values. The stored cell
  /// is replaced under the same identity; the returned snapshot is the new
  /// value. `None` when no cell exists there.
  pub fn update_cell(&mut self, q: i32, r: i32, patch: &CellPatch<P>) -> Option<Cell<P>> {
    self.update_cell_by_coords(&axial_to_cubic(q, r), patch)
  }

  /// Applies a patch to the cell at the given cube coordinates.
  pub fn update_cell_by_coords(
    &mut self,
    coords: &HexCoordinates,
    patch: &CellPatch<P>,
  ) -> Option<Cell<P>> {
    let id = create_cell_id_cubic(coords);
    let current = self.cells.remove(&id)?;
    let updated = Cell {
      id: current.id,
      coords: current.coords,
      elevation: patch.elevation.unwrap_or(current.elevation),
      movement_cost: patch.movement_cost.unwrap_or(current.movement_cost),
      is_impassable: patch.is_impassable.unwrap_or(current.is_impassable),
      custom_props: patch.custom_props.clone().unwrap_or(current.custom_props),
    };
    self.cells.insert(updated.id.clone(), updated.clone());
    Some(updated)
  }

  /// Removes the cell at axial `(q, r)`. True iff something was removed.
  pub fn remove_cell(&mut self, q: i32, r: i32) -> bool {
    self.cells.remove(&create_cell_id(q, r)).is_some()
  }

  /// Removes the cell at the given cube coordinates. True iff something was
  /// removed.
  pub fn remove_cell_by_coords(&mut self, coords: &HexCoordinates) -> bool {
    self.cells.remove(&create_cell_id_cubic(coords)).is_some()
  }

  /// Whether a cell exists at axial `(q, r)`.
  #[must_use]
  pub fn has_cell(&self, q: i32, r: i32) -> bool {
    self.cells.contains_key(&create_cell_id(q, r))
  }

  /// Whether a cell exists at the given cube coordinates.
  #[must_use]
  pub fn has_cell_at_coords(&self, coords: &HexCoordinates) -> bool {
    self.cells.contains_key(&create_cell_id_cubic(coords))
  }

  /// Snapshot of every stored cell. Enumeration order is unspecified.
  #[must_use]
  pub fn get_all_cells(&self) -> Vec<Cell<P>> {
    self.cells.values().cloned().collect()
  }

  /// Snapshot of every stored cell id. Enumeration order is unspecified.
  #[must_use]
  pub fn get_all_cell_ids(&self) -> Vec<String> {
    self.cells.keys().cloned().collect()
  }

  /// Snapshot of the cells matching `predicate`.
  #[must_use]
  pub fn get_cells_where<F>(&self, mut predicate: F) -> Vec<Cell<P>>
  where
    F: FnMut(&Cell<P>) -> bool,
  {
    self.cells.values().filter(|cell| predicate(cell)).cloned().collect()
  }

  /// Removes every cell. Defaults are kept.
  pub fn clear(&mut self) {
    self.cells.clear();
  }

  /// Number of stored cells.
  #[must_use]
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  /// Whether the grid holds no cells.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Min/max of all three cube axes across stored cells, `None` when empty.
  #[must_use]
  pub fn get_bounds(&self) -> Option<GridBounds> {
    let mut cells = self.cells.values();
    let first = cells.next()?;
    let mut bounds = GridBounds {
      min_q: first.coords.q,
      max_q: first.coords.q,
      min_r: first.coords.r,
      max_r: first.coords.r,
      min_s: first.coords.s,
      max_s: first.coords.s,
    };
    for cell in cells {
      bounds.min_q = bounds.min_q.min(cell.coords.q);
      bounds.max_q = bounds.max_q.max(cell.coords.q);
      bounds.min_r = bounds.min_r.min(cell.coords.r);
      bounds.max_r = bounds.max_r.max(cell.coords.r);
      bounds.min_s = bounds.min_s.min(cell.coords.s);
      bounds.max_s = bounds.max_s.max(cell.coords.s);
    }
    Some(bounds)
  }

  /// Inserts the origin cell plus its six neighbors, all at the given
  /// elevation (grid default when `None`).
  ///
  /// Goes through the atomic [`HexGrid::add_cells`] path: if any of the
  /// seven coordinates is occupied the call fails with
  /// [`HexGridError::DuplicateCell`] and inserts nothing.
  pub fn create_basic_hex_ring(
    &mut self,
    center_elevation: Option<f64>,
  ) -> Result<Vec<Cell<P>>, HexGridError> {
    let elevation = center_elevation.unwrap_or(self.defaults.elevation);

    let mut definitions = Vec::with_capacity(7);
    let ring_definition = |coords: HexCoordinates| {
      let mut definition = CellDefinition::new(coords.q, coords.r);
      definition.elevation = Some(elevation);
      definition
    };
    definitions.push(ring_definition(HexCoordinates::ORIGIN));
    for neighbor in neighbor_coordinates(0, 0) {
      definitions.push(ring_definition(neighbor));
    }

    self.add_cells(&definitions)
  }

  /// The six neighbor coordinates of axial `(q, r)`, in direction order.
  ///
  /// Pure arithmetic over the offset table; ignores whether the neighbors
  /// are actually present in the grid.
  #[must_use]
  pub fn get_neighbor_coordinates(&self, q: i32, r: i32) -> [HexCoordinates; 6] {
    neighbor_coordinates(q, r)
  }

  /// The six neighbor coordinates of the given cube coordinates.
  #[must_use]
  pub fn get_neighbor_coordinates_from_coords(&self, coords: &HexCoordinates) -> [HexCoordinates; 6] {
    neighbor_coordinates(coords.q, coords.r)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resolve_applies_defaults() {
    let grid: HexGrid = HexGrid::with_defaults(GridDefaults {
      elevation: 2.5,
      movement_cost: 3.0,
      is_impassable: true,
      custom_props: (),
    });
    let cell = grid.resolve_definition(&CellDefinition::new(1, -1)).unwrap();
    assert_eq!(cell.id, "1,-1,0");
    assert_eq!(cell.coords, HexCoordinates { q: 1, r: -1, s: 0 });
    assert!((cell.elevation - 2.5).abs() < f64::EPSILON);
    assert!((cell.movement_cost - 3.0).abs() < f64::EPSILON);
    assert!(cell.is_impassable);
  }

  #[test]
  fn test_resolve_rejects_bad_explicit_s() {
    let grid: HexGrid = HexGrid::new();
    let mut definition = CellDefinition::new(1, 2);
    definition.s = Some(0);
    assert_eq!(
      grid.resolve_definition(&definition),
      Err(HexGridError::InvalidCoordinate { q: 1, r: 2, s: 0 })
    );
  }

  #[test]
  fn test_resolve_accepts_matching_explicit_s() {
    let grid: HexGrid = HexGrid::new();
    let mut definition = CellDefinition::new(1, 2);
    definition.s = Some(-3);
    let cell = grid.resolve_definition(&definition).unwrap();
    assert_eq!(cell.coords, HexCoordinates { q: 1, r: 2, s: -3 });
  }
}
