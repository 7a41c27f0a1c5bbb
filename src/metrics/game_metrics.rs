use std::time::{Duration, Instant};

/// Per-run play statistics shown in the header. Nothing here is persisted.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub restarts: u32,
    pub ticks: u64,
    pub wraps: u64,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            restarts: 0,
            ticks: 0,
            wraps: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_tick(&mut self, wrapped: bool) {
        self.ticks += 1;
        if wrapped {
            self.wraps += 1;
        }
    }

    /// Track the score reached so far; called every frame so the high score is live
    pub fn on_score(&mut self, score: u32) {
        if score > self.high_score {
            self.high_score = score;
        }
    }

    pub fn on_restart(&mut self, final_score: u32) {
        self.restarts += 1;
        self.on_score(final_score);
        self.on_game_start();
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_restart(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.restarts, 1);

        metrics.on_restart(5);
        assert_eq!(metrics.high_score, 10); // Should not decrease
        assert_eq!(metrics.restarts, 2);

        metrics.on_score(15);
        assert_eq!(metrics.high_score, 15);
    }

    #[test]
    fn test_tick_counting() {
        let mut metrics = GameMetrics::new();
        metrics.on_tick(false);
        metrics.on_tick(true);
        metrics.on_tick(false);

        assert_eq!(metrics.ticks, 3);
        assert_eq!(metrics.wraps, 1);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
