//! "Stable-since" debouncer.
//!
//! Instead of counting consecutive equal samples, the debouncer remembers the
//! tick at which the raw level last flipped. A level is accepted once the
//! tick counter has moved strictly more than `threshold` ticks past that
//! point, so the outcome does not depend on how often `update` is called.

use crate::tick::Ticks;

/// A confirmed change of the debounced level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Confirmed low to high.
    Pressed,
    /// Confirmed high to low.
    Released,
}

#[derive(Debug, Clone)]
pub struct DebounceController {
    last_observed: bool,
    candidate_since: Ticks,
    confirmed: bool,
    threshold: Ticks,
}

impl DebounceController {
    /// Starts released, with the candidate window anchored at tick 0.
    ///
    /// A button already held at boot is therefore confirmed as pressed
    /// `threshold + 1` ticks after the first sample.
    pub const fn new(threshold: Ticks) -> Self {
        Self {
            last_observed: false,
            candidate_since: 0,
            confirmed: false,
            threshold,
        }
    }

    /// Feed one raw sample taken at tick `now`.
    pub fn update(&mut self, raw: bool, now: Ticks) -> Option<Transition> {
        if raw != self.last_observed {
            self.candidate_since = now;
        }

        let mut transition = None;
        // wrapping_sub keeps the elapsed count right across counter wrap.
        if now.wrapping_sub(self.candidate_since) > self.threshold && raw != self.confirmed {
            self.confirmed = raw;
            transition = Some(if raw {
                Transition::Pressed
            } else {
                Transition::Released
            });
        }

        self.last_observed = raw;
        transition
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn threshold(&self) -> Ticks {
        self.threshold
    }
}
