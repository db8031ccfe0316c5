//! Simulated lidar: fixed-angle beams marched in fixed steps until the
//! first obstacle cell.

use std::f64::consts::TAU;

use super::{Pose, ScanSample, WorldGrid};

/// Range sensor with evenly spaced beams around the full circle.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLidar {
    max_range: f64,
    beam_count: usize,
    step_size: f64,
}

impl SimulatedLidar {
    /// All parameters must be positive.
    pub fn new(max_range: f64, beam_count: usize, step_size: f64) -> Self {
        assert!(
            max_range > 0.0 && beam_count > 0 && step_size > 0.0,
            "lidar parameters must be positive"
        );
        Self { max_range, beam_count, step_size }
    }

    /// Cast every beam from the given pose. Beam `i` sits at relative
    /// angle `TAU * i / beam_count`; sample order follows beam index.
    pub fn scan(&self, world: &WorldGrid, pose: &Pose) -> Vec<ScanSample> {
        let mut samples = Vec::with_capacity(self.beam_count);
        for beam in 0..self.beam_count {
            let relative_angle = TAU * beam as f64 / self.beam_count as f64;
            let (distance, hit) = self.cast_beam(world, pose, pose.theta + relative_angle);
            samples.push(ScanSample { relative_angle, distance, hit });
        }
        samples
    }

    /// March from `step_size` to `max_range` and report the first obstacle
    /// cell (truncated coordinates), else `(max_range, false)`.
    fn cast_beam(&self, world: &WorldGrid, pose: &Pose, angle: f64) -> (f64, bool) {
        let mut distance = self.step_size;
        while distance <= self.max_range {
            let x = (pose.x + angle.cos() * distance) as i32;
            let y = (pose.y + angle.sin() * distance) as i32;
            if world.is_obstacle(x, y) {
                return (distance, true);
            }
            distance += self.step_size;
        }
        (self.max_range, false)
    }
}
