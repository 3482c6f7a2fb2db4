//! Core layout constants for the flat-top unit hexagon.

// Mathematical constants
/// sqrt(3)
pub const M_SQRT3: f64 = 1.732_050_807_568_877_2;
/// sqrt(3) / 2.0, also known as sin(60 degrees); the center-to-edge distance of a unit hexagon
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
/// sqrt(3) / 3.0, the reciprocal of sqrt(3)
pub const M_SQRT3_3: f64 = 0.577_350_269_189_625_7;

/// One third
pub const M_ONETHIRD: f64 = 1.0 / 3.0;
/// Two thirds
pub const M_TWOTHIRDS: f64 = 2.0 / 3.0;

/// World-space pitch between consecutive hex rows (1.5 * unit hex size).
pub const ROW_PITCH: f64 = 1.5;

/// Number of faces (and therefore neighbors) of a hexagonal cell.
pub const NUM_HEX_DIRECTIONS: usize = 6;

/// Threshold epsilon for floating point comparisons in geometry checks.
pub const EPSILON: f64 = 0.000_000_000_001;
