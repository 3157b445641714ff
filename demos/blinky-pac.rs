//! Blinky example using only the PAC
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;
use stm32f0_hal::pac;

// Discovery board LED pin definitions. All on port C
const LEDS: u32 = 0b1111 << 6;
// One two bit MODER field per LED pin, set to general purpose output
const LED_MODES: u32 = 0b01010101 << 12;
const LED_MODE_MASK: u32 = 0b11111111 << 12;

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();
    dp.RCC.ahbenr.modify(|_, w| w.iopcen().set_bit());
    dp.GPIOC
        .moder
        .modify(|r, w| unsafe { w.bits((r.bits() & !LED_MODE_MASK) | LED_MODES) });
    for _ in 0..10 {
        dp.GPIOC.bsrr.write(|w| unsafe { w.bits(LEDS << 16) });
        cortex_m::asm::delay(2_000_000);
        dp.GPIOC.bsrr.write(|w| unsafe { w.bits(LEDS) });
        cortex_m::asm::delay(2_000_000);
    }
    loop {
        dp.GPIOC
            .odr
            .modify(|r, w| unsafe { w.bits(r.bits() ^ LEDS) });
        cortex_m::asm::delay(4_000_000);
    }
}
