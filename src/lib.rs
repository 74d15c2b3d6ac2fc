//! Debounced push-button LED toggle.
//!
//! A periodic tick source counts 50 ms ticks from interrupt context while a
//! busy-polling loop debounces the button against that count and toggles the
//! LED once per confirmed press.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module below.
mod fmt;

pub mod config;
pub mod debounce;
pub mod error;
pub mod hardware;
pub mod tick;
pub mod toggle;

pub use config::DebounceConfig;
pub use debounce::{DebounceController, Transition};
pub use error::StartupError;
pub use tick::{PeriodicTimer, TickCounter, TickSource, Ticks};
pub use toggle::ToggleOnPress;
