//! # API for enabling and disabling peripheral clocks
use crate::pac::RCC;

/// Peripherals clocked from the AHB bus. The discriminant is the bit
/// position in the RCC AHBENR register
pub enum PeripheralClocks {
    Dma = 0,
    Sram = 2,
    Flitf = 4,
    Crc = 6,
    PortA = 17,
    PortB = 18,
    PortC = 19,
    PortD = 20,
    PortE = 21,
    PortF = 22,
    Tsc = 24,
}

pub fn enable_peripheral_clock(rcc: &mut RCC, clock: PeripheralClocks) {
    rcc.ahbenr
        .modify(|r, w| unsafe { w.bits(r.bits() | (1 << clock as u8)) });
}

pub fn disable_peripheral_clock(rcc: &mut RCC, clock: PeripheralClocks) {
    rcc.ahbenr
        .modify(|r, w| unsafe { w.bits(r.bits() & !(1 << clock as u8)) });
}
