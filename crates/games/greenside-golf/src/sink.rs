use crate::course::Hole;
use crate::physics::Ball;

/// Whether the ball drops into the hole: its center is strictly inside the
/// capture radius and it is slower than `sink_speed`.
///
/// Only the center is tested, not edge overlap, so a fast ball skimming the
/// rim is never swallowed.
pub fn is_captured(ball: &Ball, hole: &Hole, sink_speed: f32) -> bool {
    let within = ball.position.distance_squared(hole.position) < hole.radius * hole.radius;
    let slow = ball.velocity.length_squared() < sink_speed * sink_speed;
    within && slow
}

/// Settle a captured ball in the cup.
pub fn capture(ball: &mut Ball, hole: &Hole) {
    ball.position = hole.position;
    ball.stop();
}
