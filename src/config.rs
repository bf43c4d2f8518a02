//! Compile-time configuration for the Nucleo-F446RE
//!
//! Pin mapping
//! Name   | Connector | Nucleo | Function
//! LD2    | CN5 D13   | PA5    | Push-pull output, low speed, no pull
//! B1     | CN7 23    | PC13   | Input with pull-up, falling edge on EXTI13

/// Core clock: HSI oscillator, no PLL
pub const SYSCLK_HZ: u32 = 16_000_000;

/// Toggle period of the fast tier (ms)
pub const FAST_PERIOD_MS: u32 = 250;
/// Toggle period of the medium tier (ms)
pub const MEDIUM_PERIOD_MS: u32 = 500;
/// Toggle period of the slow tier (ms)
pub const SLOW_PERIOD_MS: u32 = 1000;

// The firmware times toggles with embassy-time. The SysTick helpers below give
// the equivalent core-clock reload values and check that each period fits the counter.

/// Largest value accepted by the 24-bit SysTick reload register
pub const SYSTICK_MAX_RELOAD: u32 = 0x00FF_FFFF;

/// Number of core clock ticks in a period
pub const fn reload_ticks(period_ms: u32) -> u32 {
    (SYSCLK_HZ / 1000) * period_ms
}

/// Value to write in the SysTick reload register so that it expires every `period_ms`
pub const fn systick_reload(period_ms: u32) -> u32 {
    reload_ticks(period_ms) - 1
}

const _: () = assert!(FAST_PERIOD_MS > 0, "Fast period must be non-zero");
const _: () = assert!(FAST_PERIOD_MS < MEDIUM_PERIOD_MS, "Tiers must slow down");
const _: () = assert!(MEDIUM_PERIOD_MS < SLOW_PERIOD_MS, "Tiers must slow down");
const _: () = assert!(systick_reload(SLOW_PERIOD_MS) <= SYSTICK_MAX_RELOAD, "Slow period overflows SysTick");
