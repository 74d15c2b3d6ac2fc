//! STM32F103 "Blue Pill" bring-up.
//!
//! Hardware Connections:
//!   Button -> PB1 to 3.3V (internal pull-down, reads low when open)
//!   LED    -> PC13 (onboard)
//!
//! The tick interrupt itself (an `InterruptExecutor` bound to a spare
//! vector) lives in the binary so the linker keeps the handler.

use core::time::Duration;

use embassy_executor::SendSpawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_time::Ticker;

use super::gpio_button::GpioButton;
use super::gpio_led::GpioLed;
use crate::error::StartupError;
use crate::tick::{PeriodicTimer, TickCounter, tick_period};

pub type BoardButton = GpioButton<Input<'static>>;
pub type BoardLed = GpioLed<Output<'static>>;

pub struct Board {
    pub button: BoardButton,
    pub led: BoardLed,
}

impl Board {
    /// Bring up clocks, hold the watchdog and configure both GPIO lines.
    pub fn init(config: embassy_stm32::Config) -> Result<Self, StartupError> {
        let p = embassy_stm32::init(config);

        hold_watchdog()?;

        // PB1: input, pull-down so a released button reads low
        let button = GpioButton::new(Input::new(p.PB1, Pull::Down));

        // PC13: push-pull output; its starting level carries no meaning
        let led = GpioLed::new(Output::new(p.PC13, Level::High, Speed::Low));

        info!("GPIO configured: button PB1 (pull-down), LED PC13");

        Ok(Self { button, led })
    }
}

/// Keep the independent watchdog out of the picture.
///
/// On STM32F1 the IWDG cannot be stopped once started and nothing here starts
/// it. The one way it can be running is the `WDG_SW` option bit selecting the
/// hardware watchdog, which is reported as a startup failure.
fn hold_watchdog() -> Result<(), StartupError> {
    let software_watchdog = embassy_stm32::pac::FLASH.obr().read().wdg_sw();
    if !software_watchdog {
        error!("IWDG is forced on by option bytes");
        return Err(StartupError::WatchdogLocked);
    }
    debug!("IWDG left stopped");
    Ok(())
}

/// Tick source backed by an embassy task on a high-priority
/// `InterruptExecutor`, so each tick preempts the thread-mode loop.
pub struct EmbassyTickTimer {
    spawner: SendSpawner,
}

impl EmbassyTickTimer {
    pub fn new(spawner: SendSpawner) -> Self {
        Self { spawner }
    }
}

impl PeriodicTimer for EmbassyTickTimer {
    fn start(&mut self, period: Duration, ticks: &'static TickCounter) -> Result<(), StartupError> {
        let period = embassy_time::Duration::try_from(tick_period(period)?)
            .map_err(|_| StartupError::InvalidTickPeriod)?;
        self.spawner.spawn(tick_task(ticks, period)).map_err(|_| {
            error!("tick task could not be spawned");
            StartupError::TimerStart
        })?;

        info!("tick timer started, period {} ms", period.as_millis());
        Ok(())
    }
}

#[embassy_executor::task]
async fn tick_task(ticks: &'static TickCounter, period: embassy_time::Duration) {
    let mut ticker = Ticker::every(period);
    loop {
        ticker.next().await;
        ticks.on_tick();
    }
}
