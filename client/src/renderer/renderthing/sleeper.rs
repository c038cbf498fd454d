use std::time::{Duration, Instant};

/// Frame pacer: each call to [`Sleeper::sleep`] waits out whatever is left of the target frame time.
pub struct Sleeper {
    pub target_delta_time: Duration,
    last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    pub fn from_fps(target_fps: u64) -> Self {
        Self::new(Duration::from_micros(1_000_000 / target_fps.max(1)))
    }

    /// Returns whether it actually had to sleep.
    pub fn sleep(&mut self) -> bool {
        let remaining = self
            .last_instant
            .map(|last_instant| self.target_delta_time.saturating_sub(last_instant.elapsed()))
            .unwrap_or_default();

        let slept = !remaining.is_zero();
        if slept {
            spin_sleep::sleep(remaining);
        }

        self.last_instant = Some(Instant::now());
        slept
    }
}
