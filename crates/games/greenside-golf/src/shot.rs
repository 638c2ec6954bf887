use serde::{Deserialize, Serialize};

use greenside_core::Vec2;

use crate::course::ShotTuning;

/// Lifecycle of a single hole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotState {
    /// Ball at rest, waiting for a drag gesture.
    #[default]
    Aiming,
    /// Ball rolling; aim input is ignored.
    Moving,
    /// Ball in the cup. Terminal until reset.
    Holed,
}

/// An in-progress "pull back and release" drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimGesture {
    pub start: Vec2,
    pub current: Vec2,
}

impl AimGesture {
    /// Launch velocity this drag would produce if released at `end`.
    ///
    /// The drag is inverted (start minus end), scaled by the power factor and
    /// capped at the maximum speed. Returns `None` when the result is too weak
    /// to count as an intentional shot, including a zero-length drag.
    pub fn launch_velocity(&self, end: Vec2, tuning: &ShotTuning) -> Option<Vec2> {
        let aim = (self.start - end) * tuning.power_scale;
        let velocity = aim.clamp_length(tuning.max_speed);
        // Squared, matching the stop test in `Ball::launch`.
        let speed_sq = velocity.length_squared();
        let min = tuning.min_intent_speed;
        if speed_sq <= 0.0 || !speed_sq.is_finite() || speed_sq < min * min {
            return None;
        }
        Some(velocity)
    }
}

/// Shot-taking state for one ball on one hole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotSession {
    state: ShotState,
    aim: Option<AimGesture>,
    shots: u32,
}

impl ShotSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ShotState {
        self.state
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// The drag in progress, if any.
    pub fn aim(&self) -> Option<&AimGesture> {
        self.aim.as_ref()
    }

    /// Start a drag at `point`. Ignored outside `Aiming`; restarts a drag
    /// already in progress.
    pub fn begin_aim(&mut self, point: Vec2) {
        if self.state != ShotState::Aiming || !point.is_finite() {
            return;
        }
        self.aim = Some(AimGesture {
            start: point,
            current: point,
        });
    }

    /// Move the drag's current point. Ignored without a drag in progress.
    pub fn update_aim(&mut self, point: Vec2) {
        if self.state != ShotState::Aiming || !point.is_finite() {
            return;
        }
        if let Some(aim) = self.aim.as_mut() {
            aim.current = point;
        }
    }

    /// Release the drag at `point`.
    ///
    /// On an intentional shot, counts the stroke, moves to `Moving` and
    /// returns the launch velocity. Otherwise the gesture is discarded and
    /// the state stays `Aiming`.
    pub fn end_aim(&mut self, point: Vec2, tuning: &ShotTuning) -> Option<Vec2> {
        if self.state != ShotState::Aiming || !point.is_finite() {
            return None;
        }
        let gesture = self.aim.take()?;
        let velocity = gesture.launch_velocity(point, tuning)?;
        self.shots += 1;
        self.state = ShotState::Moving;
        Some(velocity)
    }

    /// The ball stopped without being captured.
    pub fn ball_stopped(&mut self) {
        if self.state == ShotState::Moving {
            self.state = ShotState::Aiming;
        }
    }

    /// The ball dropped into the hole.
    pub fn ball_holed(&mut self) {
        if self.state == ShotState::Moving {
            self.state = ShotState::Holed;
            self.aim = None;
        }
    }

    /// Back to `Aiming` with no drag in progress, optionally keeping the
    /// stroke count.
    pub fn reset(&mut self, clear_shots: bool) {
        self.state = ShotState::Aiming;
        self.aim = None;
        if clear_shots {
            self.shots = 0;
        }
    }
}
