//! The control loop: debounce the button and toggle the LED on each
//! confirmed press. Releases are confirmed too but drive nothing.

use crate::config::DebounceConfig;
use crate::debounce::{DebounceController, Transition};
use crate::hardware::traits::{Button, Led};
use crate::tick::TickSource;

pub struct ToggleOnPress<B, L, T> {
    button: B,
    led: L,
    ticks: T,
    debouncer: DebounceController,
}

impl<B, L, T> ToggleOnPress<B, L, T>
where
    B: Button,
    L: Led,
    T: TickSource,
{
    pub fn new(button: B, led: L, ticks: T, config: &DebounceConfig) -> Self {
        Self {
            button,
            led,
            ticks,
            debouncer: DebounceController::new(config.threshold_ticks),
        }
    }

    /// One iteration: sample, debounce, act.
    pub fn poll(&mut self) -> Option<Transition> {
        let raw = self.button.is_pressed();
        let now = self.ticks.read_ticks();

        let transition = self.debouncer.update(raw, now);
        match transition {
            Some(Transition::Pressed) => {
                self.led.toggle();
                debug!("press confirmed at tick {}, LED toggled", now);
            }
            Some(Transition::Released) => debug!("release confirmed at tick {}", now),
            None => {}
        }
        transition
    }

    /// Busy-poll forever. Never sleeps or yields.
    pub fn run(&mut self) -> ! {
        info!("debounce loop running, threshold {} ticks", self.debouncer.threshold());
        loop {
            self.poll();
        }
    }

    /// Debounced button level.
    pub fn confirmed(&self) -> bool {
        self.debouncer.confirmed()
    }

    pub fn into_parts(self) -> (B, L, T) {
        (self.button, self.led, self.ticks)
    }
}
