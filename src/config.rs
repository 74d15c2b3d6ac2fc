use core::time::Duration;

/// Tick period of the reference build.
pub const TICK_PERIOD: Duration = Duration::from_millis(50);

/// Ticks a new level must outlast before it is accepted.
pub const DEBOUNCE_THRESHOLD_TICKS: u32 = 1;

/// Compiled-in timing of the debounce loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// Interval between tick counter increments.
    pub tick_period: Duration,
    /// A candidate level is confirmed once it has been stable for strictly
    /// more than this many ticks.
    pub threshold_ticks: u32,
}

impl DebounceConfig {
    pub const REFERENCE: Self = Self::new(TICK_PERIOD, DEBOUNCE_THRESHOLD_TICKS);

    pub const fn new(tick_period: Duration, threshold_ticks: u32) -> Self {
        Self {
            tick_period,
            threshold_ticks,
        }
    }

    /// Nominal debounce window, `threshold_ticks * tick_period`.
    ///
    /// Because the tick phase at the moment of the edge is unknown, the real
    /// delay before confirmation lies between this value and one extra period.
    pub fn window(&self) -> Duration {
        self.tick_period.saturating_mul(self.threshold_ticks)
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}
