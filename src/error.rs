use core::fmt;

/// Fatal bring-up failures. Any of these keeps the main loop from starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// The tick timer was asked for a zero period.
    InvalidTickPeriod,
    /// The periodic tick could not be scheduled.
    TimerStart,
    /// The hardware watchdog is forced on by option bytes and cannot be held.
    WatchdogLocked,
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTickPeriod => f.write_str("tick period must be non-zero"),
            Self::TimerStart => f.write_str("periodic tick timer failed to start"),
            Self::WatchdogLocked => f.write_str("hardware watchdog is enabled by option bytes"),
        }
    }
}

impl core::error::Error for StartupError {}
