//! Discrete motion model: axis velocities from pressed directions.

use bitflags::bitflags;

use super::Pose;

bitflags! {
    /// Directions pressed during one input token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DirectionSet: u8 {
        const FORWARD = 1 << 0;
        const BACK = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl DirectionSet {
    /// Decode one token: any `W`/`S`/`A`/`D` character presses the
    /// matching direction, other characters are ignored. Tokens arrive
    /// pre-uppercased from the script loader.
    pub fn from_token(token: &str) -> Self {
        let mut directions = DirectionSet::empty();
        for ch in token.chars() {
            match ch {
                'W' => directions |= DirectionSet::FORWARD,
                'S' => directions |= DirectionSet::BACK,
                'A' => directions |= DirectionSet::LEFT,
                'D' => directions |= DirectionSet::RIGHT,
                _ => {}
            }
        }
        directions
    }
}

/// Apply one motion step. Forward decreases y.
///
/// A net-zero velocity (nothing pressed, or opposing directions
/// cancelling) leaves the pose untouched. Any movement re-points the
/// heading along the velocity vector. Obstacle rejection is the caller's
/// job and is all-or-nothing: a rejected candidate reverts entirely,
/// heading included.
pub fn apply_motion(pose: &Pose, speed: f64, directions: DirectionSet) -> Pose {
    let mut vx = 0.0;
    let mut vy = 0.0;

    if directions.contains(DirectionSet::FORWARD) {
        vy -= speed;
    }
    if directions.contains(DirectionSet::BACK) {
        vy += speed;
    }
    if directions.contains(DirectionSet::LEFT) {
        vx -= speed;
    }
    if directions.contains(DirectionSet::RIGHT) {
        vx += speed;
    }

    if vx == 0.0 && vy == 0.0 {
        return *pose;
    }

    Pose {
        x: pose.x + vx,
        y: pose.y + vy,
        theta: vy.atan2(vx),
    }
}
