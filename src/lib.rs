#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod selector;
pub mod tier;
pub mod toggle;

#[cfg(feature = "firmware")]
pub mod board;

pub use selector::{ModeSelector, PeriodSink};
pub use tier::BlinkTier;
pub use toggle::PeriodicToggle;

/// Error raised by the blink logic
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkError {
    /// Raw value does not name a tier (valid tiers are 1, 2 and 3)
    InvalidTier(u8),
    /// Unable to drive the output pin
    Pin,
}
