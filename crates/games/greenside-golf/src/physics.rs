use serde::{Deserialize, Serialize};

use greenside_core::Vec2;

use crate::course::Field;

/// State of the ball on the field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Kept consistent with the speed relative to the field's stop speed
    /// after every completed update.
    pub is_moving: bool,
}

impl Ball {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            is_moving: false,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Give the ball a new velocity. `is_moving` follows the stop speed so a
    /// sub-threshold launch leaves the ball at rest.
    pub fn launch(&mut self, velocity: Vec2, stop_speed: f32) {
        if velocity.length_squared() < stop_speed * stop_speed {
            self.stop();
            return;
        }
        self.velocity = velocity;
        self.is_moving = true;
    }

    /// Snap to rest.
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
        self.is_moving = false;
    }
}

/// Which boundary the ball struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// A single boundary correction made during a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    pub wall: Wall,
    /// Perpendicular speed before the reflection.
    pub speed: f32,
}

/// What happened during one `advance` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    /// Correction on the x axis (left or right), if any.
    pub horizontal: Option<Impact>,
    /// Correction on the y axis (top or bottom), if any.
    pub vertical: Option<Impact>,
    /// The ball dropped below the stop speed during this step.
    pub came_to_rest: bool,
}

impl StepOutcome {
    /// Impacts in resolution order (horizontal first).
    pub fn impacts(&self) -> impl Iterator<Item = Impact> + '_ {
        self.horizontal.iter().chain(self.vertical.iter()).copied()
    }
}

/// Advance a moving ball by `dt` seconds on `field`.
///
/// Order: friction decay, explicit Euler integration, per-axis boundary
/// resolution (horizontal then vertical, at most one side per axis), then
/// rest detection. A ball at rest, or a non-positive `dt`, is a no-op.
pub fn advance(ball: &mut Ball, field: &Field, dt: f32) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    if !ball.is_moving || dt.is_nan() || dt <= 0.0 {
        return outcome;
    }

    // Exponential decay normalized to "fraction retained per second".
    ball.velocity *= field.friction.powf(dt);

    ball.position += ball.velocity * dt;

    outcome.horizontal = resolve_horizontal(ball, field);
    outcome.vertical = resolve_vertical(ball, field);

    let stop = field.stop_speed;
    if ball.velocity.length_squared() < stop * stop {
        ball.stop();
        outcome.came_to_rest = true;
    } else {
        ball.is_moving = true;
    }
    outcome
}

fn resolve_horizontal(ball: &mut Ball, field: &Field) -> Option<Impact> {
    let r = ball.radius;
    if ball.position.x - r < field.left {
        ball.position.x = field.left + r;
        Some(reflect(&mut ball.velocity.x, Wall::Left, -1.0, field.restitution))
    } else if ball.position.x + r > field.right {
        ball.position.x = field.right - r;
        Some(reflect(&mut ball.velocity.x, Wall::Right, 1.0, field.restitution))
    } else {
        None
    }
}

fn resolve_vertical(ball: &mut Ball, field: &Field) -> Option<Impact> {
    let r = ball.radius;
    if ball.position.y - r < field.top {
        ball.position.y = field.top + r;
        Some(reflect(&mut ball.velocity.y, Wall::Top, -1.0, field.restitution))
    } else if ball.position.y + r > field.bottom {
        ball.position.y = field.bottom - r;
        Some(reflect(&mut ball.velocity.y, Wall::Bottom, 1.0, field.restitution))
    } else {
        None
    }
}

/// Reflect a velocity component heading into a wall (`into` is the sign of
/// motion toward it). A component already heading away is left unchanged.
fn reflect(component: &mut f32, wall: Wall, into: f32, restitution: f32) -> Impact {
    let speed = component.abs();
    if *component * into > 0.0 {
        *component = -*component * restitution;
    }
    Impact { wall, speed }
}
