use crate::store::UiState;
use foh_domain::config::TimingConfig;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::trace;

/// Drives automatic feature rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    interval: Duration,
}

impl Carousel {
    /// # Panics
    /// Panics if `interval` is zero.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "carousel interval must be non-zero");
        Self { interval }
    }

    /// Uses the configured interval, falling back to the default for a zero value.
    #[must_use]
    pub fn from_config(timing: &TimingConfig) -> Self {
        let interval = timing.carousel_interval();
        if interval.is_zero() {
            Self::new(TimingConfig::default().carousel_interval())
        } else {
            Self::new(interval)
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// One automatic advance.
    pub fn tick(&self, state: &mut UiState) -> usize {
        state.next_feature()
    }

    /// Calls `on_tick` once per interval, starting one interval from now.
    ///
    /// Never returns; stop it by dropping the future (the owning UI task does this
    /// when the carousel leaves the page).
    pub async fn run<F>(self, mut on_tick: F)
    where
        F: FnMut(),
    {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            trace!(interval_ms = self.interval.as_millis(), "Carousel tick");
            on_tick();
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::from_config(&TimingConfig::default())
    }
}
