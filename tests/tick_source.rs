//! The tick counter under a real preempting writer, and the `PeriodicTimer`
//! contract as seen from the startup sequence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use debounce_toggle::tick::tick_period;
use debounce_toggle::{PeriodicTimer, StartupError, TickCounter, TickSource};

/// Host stand-in for the hardware timer: a thread calling `on_tick` every
/// `period` until `stop` is raised.
struct ThreadTimer {
    stop: &'static AtomicBool,
    handle: Option<thread::JoinHandle<()>>,
}

impl ThreadTimer {
    fn new() -> Self {
        Self {
            stop: Box::leak(Box::new(AtomicBool::new(false))),
            handle: None,
        }
    }

    fn shutdown(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
    }
}

impl PeriodicTimer for ThreadTimer {
    fn start(&mut self, period: Duration, ticks: &'static TickCounter) -> Result<(), StartupError> {
        let period = tick_period(period)?;
        if self.handle.is_some() {
            return Err(StartupError::TimerStart);
        }
        let stop = self.stop;
        self.handle = Some(thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                thread::sleep(period);
                ticks.on_tick();
            }
        }));
        Ok(())
    }
}

fn leaked_counter() -> &'static TickCounter {
    Box::leak(Box::new(TickCounter::new()))
}

#[test]
fn reads_are_monotonic_while_ticking() {
    let ticks = leaked_counter();
    let mut timer = ThreadTimer::new();
    timer.start(Duration::from_micros(50), ticks).unwrap();

    let mut previous = ticks.read_ticks();
    for _ in 0..200_000 {
        let current = ticks.read_ticks();
        assert!(current >= previous, "{current} < {previous}");
        previous = current;
    }

    timer.shutdown();
    assert!(ticks.read_ticks() >= previous);
}

#[test]
fn counter_advances_once_started() {
    let ticks = leaked_counter();
    let mut timer = ThreadTimer::new();
    timer.start(Duration::from_millis(1), ticks).unwrap();

    while ticks.read_ticks() < 3 {
        thread::yield_now();
    }

    timer.shutdown();
    let stopped_at = ticks.read_ticks();
    thread::sleep(Duration::from_millis(5));
    assert_eq!(ticks.read_ticks(), stopped_at);
}

#[test]
fn zero_period_is_a_startup_error() {
    let ticks = leaked_counter();
    let mut timer = ThreadTimer::new();
    assert_eq!(
        timer.start(Duration::ZERO, ticks),
        Err(StartupError::InvalidTickPeriod)
    );
    assert_eq!(ticks.read_ticks(), 0);
}

#[test]
fn oversized_period_is_a_startup_error() {
    let ticks = leaked_counter();
    let mut timer = ThreadTimer::new();
    assert_eq!(
        timer.start(Duration::MAX, ticks),
        Err(StartupError::InvalidTickPeriod)
    );
    assert!(timer.handle.is_none());
}

#[test]
fn debounce_loop_reads_the_shared_counter() {
    let ticks = leaked_counter();
    for _ in 0..4 {
        ticks.on_tick();
    }
    let source: &dyn TickSource = ticks;
    assert_eq!(source.read_ticks(), 4);
}
