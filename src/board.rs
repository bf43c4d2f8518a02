use defmt::{error, info, trace};
use embassy_executor::{SpawnError, Spawner};
use embassy_futures::select::{select, Either};
use embassy_stm32::{
    exti::ExtiInput,
    gpio::{Level, Output, Pull, Speed},
};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Timer};

use crate::{BlinkTier, ModeSelector, PeriodSink, PeriodicToggle};

/// Period (ms) pushed by the mode selector to the toggle driver
pub type SignalPeriod = Signal<CriticalSectionRawMutex, u32>;

static BLINK_PERIOD: SignalPeriod = Signal::new();

impl PeriodSink for &'static SignalPeriod {
    fn push_period(&mut self, period_ms: u32) {
        self.signal(period_ms)
    }
}

pub struct BoardNucleoF446Re {
    pub led: Output<'static>,
    pub button: ExtiInput<'static>,
}

impl BoardNucleoF446Re {

    /// Pin mapping is listed in [`crate::config`]
    pub fn init() -> BoardNucleoF446Re {
        let mut config = embassy_stm32::Config::default();

        // Run directly from the 16MHz HSI oscillator, no PLL
        config.rcc.hsi = true;
        config.rcc.sys = embassy_stm32::rcc::Sysclk::HSI;
        let p = embassy_stm32::init(config);

        // Led off at reset, button pulls low when pressed
        let led = Output::new(p.PA5, Level::Low, Speed::Low);
        let button = ExtiInput::new(p.PC13, p.EXTI13, Pull::Up);

        BoardNucleoF446Re { led, button }
    }

    /// Spawn the toggle driver and the mode selector
    pub fn start(self, spawner: &Spawner) -> Result<(), SpawnError> {
        spawner.spawn(toggle_driver(self.led, &BLINK_PERIOD))?;
        spawner.spawn(mode_selector(self.button, &BLINK_PERIOD))?;
        Ok(())
    }
}

/// Task toggling the led each time the countdown expires
/// A new period received from the selector restarts the countdown
#[embassy_executor::task]
pub async fn toggle_driver(led: Output<'static>, period: &'static SignalPeriod) {
    let Ok(mut driver) = PeriodicToggle::new(led, BlinkTier::default().period_ms()) else {
        error!("Unable to drive led");
        return;
    };
    // Absolute deadline: wake-up latency does not accumulate across toggles
    let mut deadline = Instant::now() + Duration::from_millis(driver.remaining_ms() as u64);
    loop {
        match select(Timer::at(deadline), period.wait()).await {
            Either::First(_) => {
                match driver.advance(driver.remaining_ms()) {
                    Ok(n) => trace!("Led toggled x{} -> {}", n, driver.is_high()),
                    Err(e) => error!("Led toggle failed: {}", e),
                }
                deadline += Duration::from_millis(driver.remaining_ms() as u64);
            }
            Either::Second(period_ms) => {
                driver.set_period(period_ms);
                deadline = Instant::now() + Duration::from_millis(driver.remaining_ms() as u64);
            }
        }
    }
}

/// Task advancing the blink tier on each falling edge of the button
/// No debouncing: a bouncing contact can skip tiers
#[embassy_executor::task]
pub async fn mode_selector(mut button: ExtiInput<'static>, period: &'static SignalPeriod) {
    let mut selector = ModeSelector::new();
    let mut sink = period;
    loop {
        button.wait_for_falling_edge().await;
        let tier = selector.on_edge(&mut sink);
        info!("Button pressed => {} ({}ms, {} ticks)", tier, tier.period_ms(), tier.reload_ticks());
    }
}
