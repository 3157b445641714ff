//! Code to test RTT logger functionality
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0_hal::{
    gpio::{DigitalOutputs, GpioPort, OutputConfig, OutputType, PortC, Pull, Speed},
    pac,
    prelude::*,
};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    let mut dp = pac::Peripherals::take().unwrap();
    let portc = PortC::new(&mut dp.RCC, dp.GPIOC);
    let mut leds = DigitalOutputs::with_config(
        &portc,
        &[6, 7, 8, 9],
        OutputConfig {
            speed: Speed::High,
            drive: OutputType::PushPull,
            pull: Pull::None,
        },
    );
    rprintln!("LED group mask: {:#06x}", leds.pin_ids());
    for num in 0..16 {
        if portc.pin_handler(num).is_some() {
            rprintln!("pin {} has a registered handler", num);
        }
    }
    let mut counter = 0;
    loop {
        rprintln!("{}: toggling the LED group", counter);
        counter += 1;
        leds.toggle().ok();
        cortex_m::asm::delay(8_000_000);
    }
}
