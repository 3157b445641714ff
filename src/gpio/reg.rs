//! Register level building blocks for the GPIO ports
//!
//! The F0 mode control block packs one field per pin into 32-bit registers,
//! two bits per pin for MODER, OSPEEDR and PUPDR and one bit per pin for
//! OTYPER. The helpers here turn a 16-bit pin mask plus a hardware code into
//! full register values, so one modify per register covers every selected
//! pin at once.
use super::outputs::{OutputType, Pull, Speed};

/// Number of pins in one GPIO bank
pub const PIN_COUNT: usize = 16;

/// MODER code for general purpose output mode
pub(super) const MODER_OUTPUT: u32 = 0b01;

/// Collect all parameters needed to initialize a group of output pins in
/// one pass over the mode control block
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OutputInit {
    /// Mask of the participating pins, bit `i` selecting pin `i`
    pub pins: u16,
    pub speed: Speed,
    pub drive: OutputType,
    pub pull: Pull,
}

/// Spread a pin mask so every mask bit lands on the lower bit of its
/// two bit register field
pub(super) const fn wide_mask(pins: u16) -> u32 {
    let mut mask = pins as u32;
    mask = (mask | (mask << 8)) & 0x00ff_00ff;
    mask = (mask | (mask << 4)) & 0x0f0f_0f0f;
    mask = (mask | (mask << 2)) & 0x3333_3333;
    mask = (mask | (mask << 1)) & 0x5555_5555;
    mask
}

/// Replace the two bit fields of every selected pin with the given code
pub(super) const fn fill_field(current: u32, pins: u16, code: u32) -> u32 {
    let wide = wide_mask(pins);
    (current & !(wide * 0b11)) | wide * code
}

/// OTYPER bits for the selected pins
pub(super) fn otyper_bits(drive: OutputType, pins: u16) -> u32 {
    match drive {
        OutputType::PushPull => 0,
        OutputType::OpenDrain => pins as u32,
    }
}

/// OSPEEDR code for a drive speed level
pub(super) fn ospeedr_code(speed: Speed) -> u32 {
    match speed {
        Speed::Low => 0b00,
        Speed::Medium => 0b01,
        Speed::High => 0b11,
    }
}

/// PUPDR code for a pull resistor selection
pub(super) fn pupdr_code(pull: Pull) -> u32 {
    match pull {
        Pull::None => 0b00,
        Pull::Up => 0b01,
        Pull::Down => 0b10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_mask_spreads_to_even_positions() {
        assert_eq!(wide_mask(0x0000), 0x0000_0000);
        assert_eq!(wide_mask(0xffff), 0x5555_5555);
        assert_eq!(wide_mask(0x0024), 0x0000_0410);
        assert_eq!(wide_mask(0x8001), 0x4000_0001);
    }

    #[test]
    fn fill_field_replaces_only_selected_fields() {
        assert_eq!(fill_field(0xffff_ffff, 0x0003, 0b01), 0xffff_fff5);
        assert_eq!(fill_field(0x0000_0000, 0x8000, 0b11), 0xc000_0000);
        assert_eq!(fill_field(0x1234_5678, 0x0000, 0b11), 0x1234_5678);
    }

    #[test]
    fn hardware_codes_match_the_reference_manual() {
        assert_eq!(MODER_OUTPUT, 0b01);
        assert_eq!(ospeedr_code(Speed::Low), 0b00);
        assert_eq!(ospeedr_code(Speed::Medium), 0b01);
        assert_eq!(ospeedr_code(Speed::High), 0b11);
        assert_eq!(pupdr_code(Pull::None), 0b00);
        assert_eq!(pupdr_code(Pull::Up), 0b01);
        assert_eq!(pupdr_code(Pull::Down), 0b10);
        assert_eq!(otyper_bits(OutputType::OpenDrain, 0x00ff), 0x00ff);
        assert_eq!(otyper_bits(OutputType::PushPull, 0x00ff), 0);
    }
}
