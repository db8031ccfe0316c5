//! Minimal SLAM simulation: static world grid, occupancy map, simulated
//! lidar, and the discrete motion model.
//!
//! Together these drive the in-process reference implementation. State is
//! explicit and threaded through each call; nothing here touches globals,
//! so a replay is a pure function of the world file and the token stream.

mod lidar;
mod motion;
mod occupancy;
mod world;

pub use lidar::SimulatedLidar;
pub use motion::{DirectionSet, apply_motion};
pub use occupancy::OccupancyGrid;
pub use world::{WorldGrid, WorldGridError};

/// Occupancy cell state.
pub type Cell = i16;

/// Cell never observed by any beam.
pub const UNKNOWN: Cell = -1;
/// Cell a beam has passed through.
pub const FREE: Cell = 0;
/// Cell a beam has terminated on.
pub const OCCUPIED: Cell = 100;

/// Robot position and heading in world-grid units.
///
/// `theta` is radians and is never normalized; trace comparison subtracts
/// headings raw, with no circular wraparound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Pose {
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }
}

/// One lidar beam measurement relative to the robot heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanSample {
    /// Beam angle relative to the robot heading, radians.
    pub relative_angle: f64,
    /// Distance measured along the beam, grid units.
    pub distance: f64,
    /// True when the beam terminated on an obstacle.
    pub hit: bool,
}
