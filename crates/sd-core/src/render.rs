//! Canonical scene renderer: the fixed visual contract every ported
//! implementation rasterizes against.

use crate::consts::CELL_SIZE;
use crate::raster::{Color, PixelBuffer};
use crate::sim::{OCCUPIED, OccupancyGrid, Pose, ScanSample};

/// Obstacle cells from the occupancy map.
pub const MAP_OBSTACLE: Color = Color::new(80, 80, 80);
/// Lidar beams.
pub const LASER: Color = Color::new(255, 0, 0);
/// Hit markers and the robot marker share one color by design.
pub const HIT_AND_ROBOT: Color = Color::new(0, 255, 0);

/// Rasterize one frame of simulation state into a fresh buffer of
/// `width*CELL_SIZE x height*CELL_SIZE` pixels.
///
/// Draw order is a strict contract: occupied map cells, then every laser
/// line, then every hit marker, then the robot square last. Reordering
/// changes pixels at overlaps and breaks cross-implementation
/// equivalence.
pub fn render_frame(map: &OccupancyGrid, pose: &Pose, scan: &[ScanSample]) -> PixelBuffer {
    let mut frame = PixelBuffer::new(map.width() * CELL_SIZE, map.height() * CELL_SIZE);
    let cell = CELL_SIZE as i32;

    for y in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            if map.value_at(x, y) == OCCUPIED {
                frame.draw_rect(x * cell, y * cell, cell, cell, MAP_OBSTACLE);
            }
        }
    }

    let scale = CELL_SIZE as f64;
    let origin_x = (pose.x * scale) as i32;
    let origin_y = (pose.y * scale) as i32;

    let mut hits = Vec::with_capacity(scan.len());
    for sample in scan {
        let angle = pose.theta + sample.relative_angle;
        let end_x = ((pose.x + angle.cos() * sample.distance) * scale) as i32;
        let end_y = ((pose.y + angle.sin() * sample.distance) * scale) as i32;
        frame.draw_line(origin_x, origin_y, end_x, end_y, LASER);
        if sample.hit {
            hits.push((end_x, end_y));
        }
    }

    for (hit_x, hit_y) in hits {
        frame.draw_circle(hit_x, hit_y, 2, HIT_AND_ROBOT);
    }

    frame.draw_rect(origin_x - 3, origin_y - 3, 6, 6, HIT_AND_ROBOT);
    frame
}
