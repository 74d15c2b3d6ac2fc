//! Periodic tick source.
//!
//! [`TickCounter`] is the only state shared between the tick interrupt and the
//! polling loop. It is a single-writer counter: exactly one context (the tick
//! callback) may call [`TickCounter::on_tick`], any number may read.
//!
//! The counter is 32 bits wide so that every target in the Cortex-M family
//! loads and stores it with one instruction; readers can never see a torn
//! value and need no critical section. A wider counter would have to mask the
//! tick interrupt around each read.

use core::sync::atomic::{AtomicU32, Ordering};
use core::time::Duration;

use crate::error::StartupError;

/// Raw tick count. Wraps after `u32::MAX` ticks (about 6.8 years at 50 ms).
pub type Ticks = u32;

/// Anything the debounce loop can ask for the current tick.
pub trait TickSource {
    fn read_ticks(&self) -> Ticks;
}

pub struct TickCounter {
    ticks: AtomicU32,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }

    /// Advance by one tick. This is the whole body of the periodic callback.
    ///
    /// Single writer only: the increment is a plain load/store pair (armv6-m
    /// has no atomic read-modify-write), which is sound because the callback
    /// never preempts itself.
    #[inline]
    pub fn on_tick(&self) {
        let next = self.ticks.load(Ordering::Relaxed).wrapping_add(1);
        self.ticks.store(next, Ordering::Release);
    }

    #[inline]
    pub fn read_ticks(&self) -> Ticks {
        self.ticks.load(Ordering::Acquire)
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for TickCounter {
    fn read_ticks(&self) -> Ticks {
        TickCounter::read_ticks(self)
    }
}

impl<T: TickSource + ?Sized> TickSource for &T {
    fn read_ticks(&self) -> Ticks {
        (**self).read_ticks()
    }
}

/// A timer that, once started, calls [`TickCounter::on_tick`] every `period`
/// until reset.
///
/// Started once at startup. Failing to start is fatal.
pub trait PeriodicTimer {
    fn start(&mut self, period: Duration, ticks: &'static TickCounter) -> Result<(), StartupError>;
}

/// Validate a requested tick period before a timer is armed with it.
///
/// The period must be non-zero and expressible as a `u64` count of
/// microseconds, the widest unit timer drivers take.
pub fn tick_period(period: Duration) -> Result<Duration, StartupError> {
    if period.is_zero() || period.as_micros() > u128::from(u64::MAX) {
        return Err(StartupError::InvalidTickPeriod);
    }
    Ok(period)
}
