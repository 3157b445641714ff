//! Simple blinky example
//!
//! Drives the four user LEDs of the STM32F072 discovery board (PC6 to PC9)
//! as one output group.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use embedded_hal::digital::v2::ToggleableOutputPin;
use panic_halt as _;
use stm32f0_hal::{
    gpio::{DigitalOutputs, PortC},
    pac,
    prelude::*,
};

#[entry]
fn main() -> ! {
    let mut dp = pac::Peripherals::take().unwrap();
    let portc = PortC::new(&mut dp.RCC, dp.GPIOC);
    let mut leds = DigitalOutputs::new(&portc, &[6, 7, 8, 9]);
    for _ in 0..10 {
        leds.set_low().ok();
        cortex_m::asm::delay(2_000_000);
        leds.set_high().ok();
        cortex_m::asm::delay(2_000_000);
    }
    loop {
        leds.toggle().ok();
        cortex_m::asm::delay(4_000_000);
    }
}
