use crate::config::{reload_ticks, FAST_PERIOD_MS, MEDIUM_PERIOD_MS, SLOW_PERIOD_MS};
use crate::BlinkError;

/// Blinking speed tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkTier {
    #[default]
    Fast = 1,
    Medium = 2,
    Slow = 3,
}

impl BlinkTier {

    /// Toggle period associated with a tier (ms)
    pub fn period_ms(&self) -> u32 {
        match self {
            BlinkTier::Fast   => FAST_PERIOD_MS,
            BlinkTier::Medium => MEDIUM_PERIOD_MS,
            BlinkTier::Slow   => SLOW_PERIOD_MS,
        }
    }

    /// Core clock ticks in one period
    pub fn reload_ticks(&self) -> u32 {
        reload_ticks(self.period_ms())
    }

    /// Advance to the following tier: 1 -> 2 -> 3 -> 1
    pub fn next(&mut self) {
        *self = match self {
            BlinkTier::Fast   => BlinkTier::Medium,
            BlinkTier::Medium => BlinkTier::Slow,
            BlinkTier::Slow   => BlinkTier::Fast,
        }
    }

    /// Tier index in 1..=3
    pub fn to_u8(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for BlinkTier {
    type Error = BlinkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BlinkTier::Fast),
            2 => Ok(BlinkTier::Medium),
            3 => Ok(BlinkTier::Slow),
            _ => Err(BlinkError::InvalidTier(value)),
        }
    }
}
