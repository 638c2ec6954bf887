use serde::{Deserialize, Serialize};

use greenside_core::Vec2;
use greenside_core::sim_trait::Simulation;
use greenside_golf::{GolfEvent, GolfSession, GolfSnapshot, HoleResult};

/// One scripted drag gesture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptedShot {
    pub from: Vec2,
    pub to: Vec2,
    /// Intermediate drag points, fed to `update_aim` in order.
    #[serde(default)]
    pub via: Vec<Vec2>,
}

/// A list of shots to play, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Script {
    /// Give up waiting for the ball to settle after this many ticks.
    pub max_ticks_per_shot: usize,
    pub shots: Vec<ScriptedShot>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            max_ticks_per_shot: 3600,
            shots: Vec::new(),
        }
    }
}

impl Script {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// Outcome of playing a script, printed as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Replay {
    pub snapshot: GolfSnapshot,
    pub result: Option<HoleResult>,
    pub events: Vec<GolfEvent>,
    pub ticks: usize,
}

/// Play every scripted shot at a fixed step of `dt` seconds, stopping early
/// once the ball is holed.
pub fn play(session: &mut GolfSession, script: &Script, dt: f32) -> Replay {
    let mut events = Vec::new();
    let mut ticks = 0;

    for (i, shot) in script.shots.iter().enumerate() {
        if session.is_finished() {
            tracing::debug!(remaining = script.shots.len() - i, "Holed, skipping shots");
            break;
        }
        session.begin_aim(shot.from);
        for &point in &shot.via {
            session.update_aim(point);
        }
        match session.end_aim(shot.to) {
            Some(event) => events.push(event),
            None => {
                tracing::debug!(shot = i + 1, "Gesture discarded");
                continue;
            },
        }

        let mut settled = false;
        for _ in 0..script.max_ticks_per_shot {
            events.extend(session.tick(dt));
            ticks += 1;
            if session.is_idle() || session.is_finished() {
                settled = true;
                break;
            }
        }
        if !settled {
            tracing::warn!(
                shot = i + 1,
                max_ticks = script.max_ticks_per_shot,
                "Ball still rolling at tick limit"
            );
        }
    }

    Replay {
        snapshot: session.snapshot(),
        result: session.result(),
        events,
        ticks,
    }
}
