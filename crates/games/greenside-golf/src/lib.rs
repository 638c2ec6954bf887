pub mod course;
pub mod error;
pub mod physics;
pub mod scoring;
pub mod shot;
pub mod sink;

use serde::{Deserialize, Serialize};

use greenside_core::Vec2;
use greenside_core::sim_trait::Simulation;
use greenside_core::time::clamp_dt;

pub use course::{CourseConfig, Hole};
pub use error::CourseError;
pub use physics::{Ball, Wall};
pub use scoring::{HoleResult, ScoreTerm};
pub use shot::{ShotSession, ShotState};

/// Events emitted while playing a hole, for renderers and sound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GolfEvent {
    ShotTaken { shot: u32, velocity: Vec2 },
    WallBounce { wall: Wall, speed: f32 },
    BallStopped { position: Vec2 },
    Holed { shots: u32, score: ScoreTerm },
}

/// Read-only view of a session for drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GolfSnapshot {
    pub ball: Ball,
    pub hole: Hole,
    pub state: ShotState,
    pub shots: u32,
    pub par: u8,
    pub aim_start: Option<Vec2>,
    pub aim_current: Option<Vec2>,
}

/// One ball, one hole, one field: the playable core.
///
/// The owning loop feeds aim gestures and elapsed time in and reads
/// snapshots out. Each tick runs physics, then the sink check, then
/// updates the shot state.
#[derive(Debug, Clone)]
pub struct GolfSession {
    config: CourseConfig,
    ball: Ball,
    shot: ShotSession,
}

impl GolfSession {
    /// Start a session on a validated course.
    pub fn new(config: CourseConfig) -> Result<Self, CourseError> {
        config.validate()?;
        let ball = Ball::new(config.ball.start, config.ball.radius);
        tracing::debug!(course = %config.name, par = config.par, "Session started");
        Ok(Self {
            config,
            ball,
            shot: ShotSession::new(),
        })
    }

    pub fn config(&self) -> &CourseConfig {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn hole(&self) -> &Hole {
        &self.config.hole
    }

    pub fn state(&self) -> ShotState {
        self.shot.state()
    }

    pub fn shots(&self) -> u32 {
        self.shot.shots()
    }

    /// Start and current points of the drag in progress.
    pub fn aim(&self) -> Option<(Vec2, Vec2)> {
        self.shot.aim().map(|a| (a.start, a.current))
    }

    /// Launch velocity the current drag would produce if released now.
    pub fn aim_preview(&self) -> Option<Vec2> {
        self.shot
            .aim()
            .and_then(|a| a.launch_velocity(a.current, &self.config.shot))
    }

    /// Final tally once the ball is holed.
    pub fn result(&self) -> Option<HoleResult> {
        (self.shot.state() == ShotState::Holed)
            .then(|| HoleResult::new(self.shot.shots(), self.config.par))
    }

    pub fn begin_aim(&mut self, point: Vec2) {
        self.shot.begin_aim(point);
    }

    pub fn update_aim(&mut self, point: Vec2) {
        self.shot.update_aim(point);
    }

    /// Release the drag. Returns `ShotTaken` if the ball was launched.
    pub fn end_aim(&mut self, point: Vec2) -> Option<GolfEvent> {
        let velocity = self.shot.end_aim(point, &self.config.shot)?;
        self.ball.launch(velocity, self.config.field.stop_speed);
        let shot = self.shot.shots();
        tracing::debug!(shot, vx = velocity.x, vy = velocity.y, "Shot taken");
        Some(GolfEvent::ShotTaken { shot, velocity })
    }

    /// Put the ball back on the tee and return to `Aiming`.
    pub fn reset(&mut self) {
        self.ball = Ball::new(self.config.ball.start, self.config.ball.radius);
        self.shot.reset(self.config.reset_clears_shots);
        tracing::debug!(shots = self.shot.shots(), "Session reset");
    }

    /// Advance by `dt` seconds. Negative or non-finite steps are ignored and
    /// oversized ones are capped at the course's `max_dt`.
    pub fn tick(&mut self, dt: f32) -> Vec<GolfEvent> {
        let mut events = Vec::new();
        if self.shot.state() != ShotState::Moving {
            return events;
        }
        let Some(dt) = clamp_dt(dt, self.config.max_dt) else {
            return events;
        };
        if dt == 0.0 {
            return events;
        }

        let outcome = physics::advance(&mut self.ball, &self.config.field, dt);
        for impact in outcome.impacts() {
            events.push(GolfEvent::WallBounce {
                wall: impact.wall,
                speed: impact.speed,
            });
        }

        let hole = &self.config.hole;
        if sink::is_captured(&self.ball, hole, self.config.shot.sink_speed) {
            sink::capture(&mut self.ball, hole);
            self.shot.ball_holed();
            let shots = self.shot.shots();
            let score = scoring::classify(shots, self.config.par);
            tracing::info!(shots, par = self.config.par, %score, "Holed");
            events.push(GolfEvent::Holed { shots, score });
        } else if !self.ball.is_moving {
            self.shot.ball_stopped();
            tracing::debug!(
                x = self.ball.position.x,
                y = self.ball.position.y,
                "Ball stopped"
            );
            events.push(GolfEvent::BallStopped {
                position: self.ball.position,
            });
        }
        events
    }

    pub fn snapshot(&self) -> GolfSnapshot {
        let aim = self.shot.aim();
        GolfSnapshot {
            ball: self.ball.clone(),
            hole: self.config.hole.clone(),
            state: self.shot.state(),
            shots: self.shot.shots(),
            par: self.config.par,
            aim_start: aim.map(|a| a.start),
            aim_current: aim.map(|a| a.current),
        }
    }
}

impl Simulation for GolfSession {
    type Event = GolfEvent;
    type Snapshot = GolfSnapshot;

    fn tick(&mut self, dt: f32) -> Vec<GolfEvent> {
        GolfSession::tick(self, dt)
    }

    fn snapshot(&self) -> GolfSnapshot {
        GolfSession::snapshot(self)
    }

    fn is_idle(&self) -> bool {
        self.shot.state() == ShotState::Aiming
    }

    fn is_finished(&self) -> bool {
        self.shot.state() == ShotState::Holed
    }
}
