use std::time::Duration;

/// Cadence at which [`ElapsedTracker::tick`] is expected to run
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Accumulates listening time in fixed steps, skipping paused ticks.
#[derive(Debug)]
pub struct ElapsedTracker {
    elapsed: Duration,
    interval: Duration,
}

impl Default for ElapsedTracker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl ElapsedTracker {
    pub fn new(interval: Duration) -> Self {
        ElapsedTracker {
            elapsed: Duration::ZERO,
            interval,
        }
    }

    pub fn tick(&mut self, paused: bool) {
        if !paused {
            self.elapsed += self.interval;
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// `HH:MM:SS`, wrapping every 24 hours
    pub fn display(&self) -> String {
        format_hms(self.elapsed)
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

pub fn format_hms(duration: Duration) -> String {
    let secs = duration.as_secs() % SECS_PER_DAY;
    let (hours, mins, secs) = (secs / 3600, (secs / 60) % 60, secs % 60);

    format!("{hours:02}:{mins:02}:{secs:02}")
}
