//! In-process reference replay.

use std::path::Path;

use sd_compare::record::{FrameRecord, Trace};
use sd_core::consts::{
    IMAGE_HEIGHT, IMAGE_WIDTH, LIDAR_BEAM_COUNT, LIDAR_MAX_RANGE, LIDAR_STEP_SIZE, MOTION_SPEED,
    START_X, START_Y, WORLD_HEIGHT, WORLD_WIDTH,
};
use sd_core::fingerprint::{changed_pixels, fingerprint};
use sd_core::raster::PixelBuffer;
use sd_core::render::render_frame;
use sd_core::script::load_input_script;
use sd_core::sim::{
    DirectionSet, OccupancyGrid, Pose, SimulatedLidar, WorldGrid, apply_motion,
};

use crate::{TraceError, TraceSource};

/// Drives the reference simulation one token at a time and fingerprints
/// each rendered frame.
///
/// The whole simulation is explicit state threaded through the loop:
/// pose, occupancy map, and the previous frame buffer mutate strictly
/// sequentially, one frame at a time. Only one frame of pixel history is
/// kept; the current buffer becomes the previous one as each record is
/// emitted.
#[derive(Debug, Clone)]
pub struct ReplayTraceSource {
    start_pose: Pose,
    speed: f64,
}

impl Default for ReplayTraceSource {
    fn default() -> Self {
        Self {
            start_pose: Pose::new(START_X, START_Y, 0.0),
            speed: MOTION_SPEED,
        }
    }
}

impl ReplayTraceSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceSource for ReplayTraceSource {
    fn collect(&self, inputs: &Path, world_grid: &Path) -> Result<Trace, TraceError> {
        let tokens = load_input_script(inputs)?;
        let world = WorldGrid::from_grid_file(world_grid, WORLD_WIDTH, WORLD_HEIGHT)?;

        let mut map = OccupancyGrid::new(WORLD_WIDTH, WORLD_HEIGHT);
        let lidar = SimulatedLidar::new(LIDAR_MAX_RANGE, LIDAR_BEAM_COUNT, LIDAR_STEP_SIZE);
        let mut pose = self.start_pose;
        let mut previous = PixelBuffer::new(IMAGE_WIDTH, IMAGE_HEIGHT);

        let mut frames = Vec::with_capacity(tokens.len());
        for (frame_index, token) in tokens.iter().enumerate() {
            let candidate = apply_motion(&pose, self.speed, DirectionSet::from_token(token));
            // all-or-nothing: a candidate landing on an obstacle cell
            // reverts entirely, heading included
            if (candidate.x != pose.x || candidate.y != pose.y)
                && !world.is_obstacle(candidate.x as i32, candidate.y as i32)
            {
                pose = candidate;
            }

            let scan = lidar.scan(&world, &pose);
            map.integrate_scan(&pose, &scan);

            let frame = render_frame(&map, &pose, &scan);
            frames.push(FrameRecord {
                frame: frame_index as u64,
                hash: fingerprint(&frame),
                changed: changed_pixels(&previous, &frame),
                pose: [pose.x, pose.y, pose.theta],
            });
            previous = frame;
        }
        Ok(frames)
    }
}
