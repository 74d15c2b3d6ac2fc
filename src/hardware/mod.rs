pub mod gpio_button;
pub mod gpio_led;
pub mod traits;

#[cfg(feature = "board")]
pub mod board;
