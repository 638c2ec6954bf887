pub mod math;
pub mod sim_trait;
pub mod time;

pub use math::Vec2;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::sim_trait::Simulation;
    use crate::time::NOMINAL_FRAME;

    /// Run `n` ticks of `dt`, returning all accumulated events.
    pub fn run_ticks<S: Simulation>(sim: &mut S, n: usize, dt: f32) -> Vec<S::Event> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(sim.tick(dt));
        }
        all_events
    }

    /// Tick at the nominal frame rate until the simulation is idle or
    /// finished. Returns the accumulated events and the number of ticks run.
    pub fn run_until_settled<S: Simulation>(
        sim: &mut S,
        max_ticks: usize,
    ) -> (Vec<S::Event>, usize) {
        let mut all_events = Vec::new();
        for n in 0..max_ticks {
            if sim.is_idle() || sim.is_finished() {
                return (all_events, n);
            }
            all_events.extend(sim.tick(NOMINAL_FRAME));
        }
        (all_events, max_ticks)
    }

    // ================================================================
    // Simulation Contract Tests
    // ================================================================
    // Generic checks every Simulation implementation must pass. Crates call
    // them from their own tests with a concrete simulation in a chosen state.

    /// `tick(0.0)` must not change the snapshot.
    pub fn contract_zero_dt_is_noop<S: Simulation>(sim: &mut S) {
        let before = sim.snapshot();
        let events = sim.tick(0.0);
        assert!(events.is_empty(), "tick(0) must not emit events");
        assert_eq!(before, sim.snapshot(), "tick(0) must not change state");
    }

    /// Negative and non-finite steps must be ignored.
    pub fn contract_invalid_dt_is_ignored<S: Simulation>(sim: &mut S) {
        let before = sim.snapshot();
        for dt in [-1.0, -NOMINAL_FRAME, f32::NAN, f32::NEG_INFINITY] {
            let events = sim.tick(dt);
            assert!(events.is_empty(), "tick({dt}) must not emit events");
        }
        assert_eq!(before, sim.snapshot(), "invalid dt must not change state");
    }

    /// An idle simulation stays idle and unchanged under repeated ticks.
    pub fn contract_idle_is_stable<S: Simulation>(sim: &mut S, ticks: usize) {
        assert!(sim.is_idle(), "contract requires an idle simulation");
        let before = sim.snapshot();
        run_ticks(sim, ticks, NOMINAL_FRAME);
        assert!(sim.is_idle(), "idle simulation must stay idle");
        assert_eq!(before, sim.snapshot(), "idle simulation must not drift");
    }

    /// A finished simulation ignores ticks entirely.
    pub fn contract_finished_is_terminal<S: Simulation>(sim: &mut S, ticks: usize) {
        assert!(sim.is_finished(), "contract requires a finished simulation");
        let before = sim.snapshot();
        let events = run_ticks(sim, ticks, NOMINAL_FRAME);
        assert!(events.is_empty(), "finished simulation must not emit events");
        assert!(sim.is_finished());
        assert_eq!(before, sim.snapshot(), "finished simulation must not change");
    }
}
