#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Error conditions are documented on the error enum
#![allow(clippy::cast_possible_truncation)] // Rounded f64 -> i32 casts in cube rounding
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)] // q/r/s component math

//! `xs-hexgrid` is a sparse hexagonal board grid under cube coordinates.
//!
//! The crate owns three concerns: a sparse collection of cells addressed by
//! `(q, r, s)` cube coordinates with CRUD and bounds queries, detection of
//! the exterior boundary faces of an arbitrary cell selection (used for
//! selection and movement-range outlines), and the bidirectional mapping
//! between hex coordinates and flat-top world positions, including the
//! rounding inverse used for pointer picking. Rendering, picking against a
//! scene graph, and pathfinding live in consuming layers.

// Declare modules
pub mod boundary;
pub mod constants;
pub mod coords;
pub mod grid;
pub mod projection;
pub mod types;

// Re-export key public types and functions for easier use
pub use boundary::find_boundary_faces;
pub use coords::{
  axial_to_cubic, create_cell_id, create_cell_id_cubic, is_valid_hex_coordinate, neighbor_coordinate,
  neighbor_coordinates, parse_cell_id, NEIGHBOR_OFFSETS,
};
pub use grid::{Cell, CellDefinition, CellPatch, GridDefaults, HexGrid, MapDefinition};
pub use projection::{cube_round, face_corner_offsets, hex_to_world, world_to_hex, CORNER_OFFSETS};
pub use types::{
  BoundaryMap, Direction, DirectionSet, GridBounds, HexCoordinates, HexGridError, WorldPoint,
};
