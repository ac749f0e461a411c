#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-frame input handed to every `update` call.
///
/// The host owns the clock; the seeker only ever reads `dt_seconds` and stamps
/// trace events with `tick`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32) -> Self {
        Self { tick, dt_seconds }
    }

    /// Clamped frame delta. Negative or NaN deltas count as a zero-length frame.
    pub fn dt(&self) -> f32 {
        if self.dt_seconds.is_finite() {
            self.dt_seconds.max(0.0)
        } else {
            0.0
        }
    }

    /// Context for the following frame.
    pub fn next(self, dt_seconds: f32) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            dt_seconds,
        }
    }
}

impl Default for TickContext {
    fn default() -> Self {
        Self {
            tick: 0,
            dt_seconds: 1.0 / 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_clamps_negative_and_nan() {
        assert_eq!(TickContext::new(0, -1.0).dt(), 0.0);
        assert_eq!(TickContext::new(0, f32::NAN).dt(), 0.0);
        assert_eq!(TickContext::new(0, 0.5).dt(), 0.5);
    }

    #[test]
    fn next_advances_tick() {
        let ctx = TickContext::new(7, 0.1).next(0.2);
        assert_eq!(ctx.tick, 8);
        assert_eq!(ctx.dt_seconds, 0.2);
    }
}
