/// Core trait for a fixed-step simulation driven by an external loop.
///
/// The loop owns timing and input plumbing; the simulation only advances
/// its own state and reports what happened.
pub trait Simulation {
    /// Events emitted during a tick (bounces, stops, completion).
    type Event;
    /// Read-only view of the state, for renderers and equality checks.
    type Snapshot: PartialEq + std::fmt::Debug;

    /// Advance by `dt` seconds. Returns the events produced by this step.
    fn tick(&mut self, dt: f32) -> Vec<Self::Event>;

    /// Current read-only view of the state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Nothing is in motion; the simulation is waiting for player input.
    fn is_idle(&self) -> bool;

    /// The simulation has reached a terminal state and ignores further input.
    fn is_finished(&self) -> bool;
}
