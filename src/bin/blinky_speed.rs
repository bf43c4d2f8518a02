#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use blinky_speed::board::BoardNucleoF446Re;
use blinky_speed::BlinkTier;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let board = BoardNucleoF446Re::init();
    let tier = BlinkTier::default();
    info!("Hello from blinky_speed: starting {} ({}ms)", tier, tier.period_ms());

    // All the work happens in the led and button tasks
    board.start(&spawner).unwrap();
}
