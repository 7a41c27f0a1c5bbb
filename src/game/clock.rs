use std::time::Duration;

/// Frame-driven tick gate.
///
/// Accumulates per-frame deltas and fires once the accumulator reaches the
/// tick interval (divided by the boost multiplier while boosted). Firing
/// resets the accumulator to zero, so several intervals elapsing within one
/// frame still produce a single tick; there is no catch-up.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    accumulator: Duration,
    boosted: bool,
    tick_interval: Duration,
    boost_multiplier: u32,
}

impl SimulationClock {
    pub fn new(tick_interval: Duration, boost_multiplier: u32) -> Self {
        Self {
            accumulator: Duration::ZERO,
            boosted: false,
            tick_interval,
            boost_multiplier: boost_multiplier.max(1),
        }
    }

    /// Add one frame's elapsed time; returns true when a tick is due
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.accumulator += delta;
        if self.accumulator < self.threshold() {
            return false;
        }

        self.accumulator = Duration::ZERO;
        true
    }

    /// Current time between ticks
    pub fn threshold(&self) -> Duration {
        if self.boosted {
            self.tick_interval / self.boost_multiplier
        } else {
            self.tick_interval
        }
    }

    pub fn set_boost(&mut self, boosted: bool) {
        self.boosted = boosted;
    }

    pub fn is_boosted(&self) -> bool {
        self.boosted
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
