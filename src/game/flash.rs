use std::time::Duration;

/// Cancellable timer behind the collision flag.
///
/// There is at most one pending clear: each trigger replaces the previous
/// deadline, so the flag stays raised for the full duration after the most
/// recent trigger. Time is the session's simulated clock, not wall time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionFlash {
    duration: Duration,
    clear_at: Option<Duration>,
}

impl CollisionFlash {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            clear_at: None,
        }
    }

    /// Raise the flag at `now`, replacing any pending clear
    pub fn trigger(&mut self, now: Duration) {
        self.clear_at = Some(now + self.duration);
    }

    /// Drop the pending clear once its deadline has passed
    pub fn update(&mut self, now: Duration) {
        if self.clear_at.is_some_and(|deadline| now >= deadline) {
            self.clear_at = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.clear_at.is_some()
    }

    pub fn cancel(&mut self) {
        self.clear_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_flag_clears_after_duration() {
        let mut flash = CollisionFlash::new(ms(500));
        assert!(!flash.is_active());

        flash.trigger(ms(1_000));
        flash.update(ms(1_499));
        assert!(flash.is_active());

        flash.update(ms(1_500));
        assert!(!flash.is_active());
    }

    #[test]
    fn test_retrigger_extends_from_latest() {
        let mut flash = CollisionFlash::new(ms(500));

        flash.trigger(ms(0));
        flash.update(ms(300));
        flash.trigger(ms(300));

        // The first deadline no longer clears the flag
        flash.update(ms(500));
        assert!(flash.is_active());

        flash.update(ms(799));
        assert!(flash.is_active());
        flash.update(ms(800));
        assert!(!flash.is_active());
    }

    #[test]
    fn test_cancel() {
        let mut flash = CollisionFlash::new(ms(500));
        flash.trigger(ms(0));
        flash.cancel();
        assert!(!flash.is_active());
    }
}
