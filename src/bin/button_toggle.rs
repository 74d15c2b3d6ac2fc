//! STM32 Blue Pill Debounced Button Toggle
//! =============================================================================================
//!
//! This firmware toggles the onboard LED once per debounced button press:
//! - TIM-driven embassy time base, ticked into a shared counter every 50 ms
//! - Button on PB1 with internal pull-down (press pulls the line high)
//! - Busy-polling main loop running the stable-since debouncer
//!
//! Hardware Connections:
//!   Button -> PB1 and 3.3V
//!   LED    -> PC13 (onboard, no external connection needed)
//!
//! Expected Behavior:
//!   - Each press toggles the LED exactly once, releases do nothing
//!   - Contact bounce shorter than the debounce window is ignored
//!   - Confirmed transitions are logged via defmt RTT

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use debounce_toggle::hardware::board::{Board, EmbassyTickTimer};
use debounce_toggle::{DebounceConfig, PeriodicTimer, TickCounter, ToggleOnPress};
use defmt::{info, unwrap};
use embassy_executor::InterruptExecutor;
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use {defmt_rtt as _, panic_probe as _};

// Written only by the tick task, read by the main loop
static TICKS: TickCounter = TickCounter::new();

// Runs the tick task from the SPI2 vector, which this board leaves unused
static TICK_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SPI2() {
    unsafe { TICK_EXECUTOR.on_interrupt() }
}

#[entry]
fn main() -> ! {
    let config = DebounceConfig::REFERENCE;

    let board = unwrap!(Board::init(embassy_stm32::Config::default()));

    // Interrupts are enabled out of reset; priority makes the tick preempt
    // thread mode
    interrupt::SPI2.set_priority(Priority::P6);
    let spawner = TICK_EXECUTOR.start(interrupt::SPI2);

    let mut timer = EmbassyTickTimer::new(spawner);
    unwrap!(timer.start(config.tick_period, &TICKS));

    info!("debounce window {} ms", config.window().as_millis() as u32);

    ToggleOnPress::new(board.button, board.led, &TICKS, &config).run()
}
