use embedded_hal_1::digital::OutputPin;

use crate::selector::PeriodSink;
use crate::BlinkError;

/// Countdown timer flipping an output each time it expires
///
/// The countdown behaves like a SysTick reload: on expiry the output is toggled
/// and the countdown restarts from the configured period.
pub struct PeriodicToggle<P> {
    pin: P,
    high: bool,
    period_ms: u32,
    remaining_ms: u32,
}

impl<P: OutputPin> PeriodicToggle<P> {

    /// Create a driver with the output low and the countdown armed
    pub fn new(mut pin: P, period_ms: u32) -> Result<Self, BlinkError> {
        pin.set_low().map_err(|_| BlinkError::Pin)?;
        let period_ms = period_ms.max(1);
        Ok(Self { pin, high: false, period_ms, remaining_ms: period_ms })
    }

    /// Change the reload value and restart the countdown from it
    /// A zero period is clamped to 1ms
    pub fn set_period(&mut self, period_ms: u32) {
        self.period_ms = period_ms.max(1);
        self.remaining_ms = self.period_ms;
    }

    /// Consume elapsed time and return the number of toggles performed
    pub fn advance(&mut self, mut elapsed_ms: u32) -> Result<u32, BlinkError> {
        let mut toggles = 0;
        while elapsed_ms >= self.remaining_ms {
            elapsed_ms -= self.remaining_ms;
            self.expire()?;
            toggles += 1;
        }
        self.remaining_ms -= elapsed_ms;
        Ok(toggles)
    }

    /// Time left before the next toggle (ms)
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Logical level of the output
    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Release the output pin
    pub fn free(self) -> P {
        self.pin
    }

    fn expire(&mut self) -> Result<(), BlinkError> {
        let level = !self.high;
        let res = if level { self.pin.set_high() } else { self.pin.set_low() };
        res.map_err(|_| BlinkError::Pin)?;
        self.high = level;
        self.remaining_ms = self.period_ms;
        Ok(())
    }
}

impl<P: OutputPin> PeriodSink for PeriodicToggle<P> {
    fn push_period(&mut self, period_ms: u32) {
        self.set_period(period_ms);
    }
}
