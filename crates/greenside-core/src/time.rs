/// Nominal frame interval of the simulation loop (60 Hz).
pub const NOMINAL_FRAME: f32 = 1.0 / 60.0;

/// Sanitize an elapsed-time step before integrating it.
///
/// Returns `None` for negative or non-finite input, which callers treat as
/// "skip this tick". Otherwise the step is capped at `max` so a single late
/// frame cannot push the ball through a boundary.
pub fn clamp_dt(dt: f32, max: f32) -> Option<f32> {
    if !dt.is_finite() || dt < 0.0 {
        return None;
    }
    Some(dt.min(max))
}
