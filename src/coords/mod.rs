// src/coords/mod.rs

pub mod axial;
pub mod cell_id;

// Re-export public functions from submodules for easier access
pub use axial::{
  axial_to_cubic, is_valid_hex_coordinate, neighbor_coordinate, neighbor_coordinates, NEIGHBOR_OFFSETS,
};
pub use cell_id::{create_cell_id, create_cell_id_cubic, parse_cell_id};
