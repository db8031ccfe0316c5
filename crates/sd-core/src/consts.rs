//! Shared world and rendering constants.
//!
//! Every implementation under comparison agrees on these values; changing
//! any of them changes the canonical pixel output and breaks fingerprint
//! equivalence with older traces.

/// World grid width in cells.
pub const WORLD_WIDTH: usize = 120;
/// World grid height in cells.
pub const WORLD_HEIGHT: usize = 80;

/// Edge length of one world cell in pixels.
pub const CELL_SIZE: usize = 8;

/// Canonical frame width in pixels.
pub const IMAGE_WIDTH: usize = WORLD_WIDTH * CELL_SIZE;
/// Canonical frame height in pixels.
pub const IMAGE_HEIGHT: usize = WORLD_HEIGHT * CELL_SIZE;

/// Distance moved per input token along each pressed axis.
pub const MOTION_SPEED: f64 = 0.5;

/// Lidar maximum range in grid units.
pub const LIDAR_MAX_RANGE: f64 = 30.0;
/// Number of lidar beams per scan.
pub const LIDAR_BEAM_COUNT: usize = 72;
/// Lidar ray-march step in grid units.
pub const LIDAR_STEP_SIZE: f64 = 1.0;

/// Starting x position of the reference replay.
pub const START_X: f64 = 10.0;
/// Starting y position of the reference replay.
pub const START_Y: f64 = 10.0;
