use std::time::{Duration, Instant};

use log::debug;

use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvanceConfig {
    pub min_interval: Duration,
    pub max_interval: Duration,
    pub step_delta: Duration,
    pub initial_interval: Duration,
    pub start_enabled: bool,
}

impl Default for AutoAdvanceConfig {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_millis(250),
            max_interval: Duration::from_secs(2),
            step_delta: Duration::from_millis(250),
            initial_interval: Duration::from_millis(500),
            start_enabled: false,
        }
    }
}

/// Rate-limited timer deciding when the driver should step the session on its own.
///
/// It never steps anything itself: [`AutoAdvance::poll`] only answers whether a step is due.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    enabled: bool,
    interval: Duration,
    min_interval: Duration,
    max_interval: Duration,
    step_delta: Duration,
    last_fire: Instant,
}

impl AutoAdvance {
    /// `now` starts the clock, so the first step is due one interval after it.
    ///
    /// The initial interval is clamped into the configured range.
    pub fn new(config: AutoAdvanceConfig, now: Instant) -> Result<Self, GameError> {
        let AutoAdvanceConfig {
            min_interval,
            max_interval,
            step_delta,
            initial_interval,
            start_enabled,
        } = config;

        if min_interval.is_zero() || step_delta.is_zero() || min_interval > max_interval {
            return Err(GameError::InvalidIntervalRange {
                min: min_interval,
                max: max_interval,
            });
        }

        Ok(Self {
            enabled: start_enabled,
            interval: initial_interval.clamp(min_interval, max_interval),
            min_interval,
            max_interval,
            step_delta,
            last_fire: now,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn bounds(&self) -> (Duration, Duration) {
        (self.min_interval, self.max_interval)
    }

    /// Returns whether auto-advance is now on.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;

        debug!("auto-advance {}", if self.enabled { "on" } else { "off" });
        self.enabled
    }

    /// Slows down. Returns the new interval.
    pub fn increase_interval(&mut self) -> Duration {
        self.interval = self.interval.saturating_add(self.step_delta).min(self.max_interval);

        debug!("auto-advance interval now {:?}", self.interval);
        self.interval
    }

    /// Speeds up. Returns the new interval.
    pub fn decrease_interval(&mut self) -> Duration {
        self.interval = self
            .interval
            .saturating_sub(self.step_delta)
            .max(self.min_interval);

        debug!("auto-advance interval now {:?}", self.interval);
        self.interval
    }

    /// True when enabled and at least one interval has passed since the last fire.
    /// Firing restarts the interval at `now`; nothing else changes state.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }

        if now.saturating_duration_since(self.last_fire) < self.interval {
            return false;
        }

        self.last_fire = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(now: Instant) -> AutoAdvance {
        AutoAdvance::new(AutoAdvanceConfig::default(), now).unwrap()
    }

    #[test]
    fn defaults() {
        let auto = controller(Instant::now());

        assert!(!auto.is_enabled());
        assert_eq!(auto.interval(), Duration::from_millis(500));
        assert_eq!(
            auto.bounds(),
            (Duration::from_millis(250), Duration::from_secs(2))
        );
    }

    #[test]
    fn disabled_never_fires() {
        let start = Instant::now();
        let mut auto = controller(start);

        assert!(!auto.poll(start + Duration::from_secs(60)));
    }

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut auto = controller(start);
        auto.toggle();

        assert!(!auto.poll(start + Duration::from_millis(499)));
        assert!(auto.poll(start + Duration::from_millis(500)));
        // The clock restarted at 500ms.
        assert!(!auto.poll(start + Duration::from_millis(900)));
        assert!(auto.poll(start + Duration::from_millis(1000)));
    }

    #[test]
    fn intervals_across_second_boundaries_fire() {
        let start = Instant::now();
        let mut auto = controller(start);
        auto.toggle();

        assert!(auto.poll(start + Duration::from_millis(700)));
        assert!(auto.poll(start + Duration::from_millis(1200)));
        assert!(auto.poll(start + Duration::from_millis(3100)));
    }

    #[test]
    fn earlier_instants_do_not_fire() {
        let start = Instant::now() + Duration::from_secs(10);
        let mut auto = controller(start);
        auto.toggle();

        assert!(!auto.poll(start - Duration::from_secs(5)));
    }

    #[test]
    fn toggle_flips() {
        let mut auto = controller(Instant::now());

        assert!(auto.toggle());
        assert!(!auto.toggle());
    }

    #[test]
    fn interval_clamps_at_max() {
        let mut auto = controller(Instant::now());

        for _ in 0..20 {
            assert!(auto.increase_interval() <= Duration::from_secs(2));
        }
        assert_eq!(auto.interval(), Duration::from_secs(2));
    }

    #[test]
    fn interval_clamps_at_min() {
        let mut auto = controller(Instant::now());

        assert_eq!(auto.decrease_interval(), Duration::from_millis(250));
        assert_eq!(auto.decrease_interval(), Duration::from_millis(250));
    }

    #[test]
    fn interval_steps_by_delta() {
        let mut auto = controller(Instant::now());

        assert_eq!(auto.increase_interval(), Duration::from_millis(750));
        assert_eq!(auto.decrease_interval(), Duration::from_millis(500));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = AutoAdvanceConfig {
            min_interval: Duration::from_secs(3),
            ..AutoAdvanceConfig::default()
        };

        assert!(matches!(
            AutoAdvance::new(config, Instant::now()),
            Err(GameError::InvalidIntervalRange { .. })
        ));
    }

    #[test]
    fn zero_minimum_is_rejected() {
        let config = AutoAdvanceConfig {
            min_interval: Duration::ZERO,
            ..AutoAdvanceConfig::default()
        };

        assert!(matches!(
            AutoAdvance::new(config, Instant::now()),
            Err(GameError::InvalidIntervalRange { .. })
        ));
    }

    #[test]
    fn zero_step_is_rejected() {
        let config = AutoAdvanceConfig {
            step_delta: Duration::ZERO,
            ..AutoAdvanceConfig::default()
        };

        assert!(matches!(
            AutoAdvance::new(config, Instant::now()),
            Err(GameError::InvalidIntervalRange { .. })
        ));
    }

    #[test]
    fn huge_steps_saturate_at_max() {
        let config = AutoAdvanceConfig {
            min_interval: Duration::from_secs(1),
            max_interval: Duration::MAX,
            step_delta: Duration::MAX,
            initial_interval: Duration::from_secs(2),
            start_enabled: false,
        };
        let mut auto = AutoAdvance::new(config, Instant::now()).unwrap();

        assert_eq!(auto.increase_interval(), Duration::MAX);
        assert_eq!(auto.increase_interval(), Duration::MAX);
        assert_eq!(auto.decrease_interval(), Duration::from_secs(1));
    }

    #[test]
    fn initial_interval_is_clamped() {
        let config = AutoAdvanceConfig {
            initial_interval: Duration::from_secs(10),
            start_enabled: true,
            ..AutoAdvanceConfig::default()
        };
        let auto = AutoAdvance::new(config, Instant::now()).unwrap();

        assert!(auto.is_enabled());
        assert_eq!(auto.interval(), Duration::from_secs(2));
    }
}
