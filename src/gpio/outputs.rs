//! # Multi pin digital output feature
//!
//! [`DigitalOutputs`] programs a whole group of pins of one port for digital
//! output. The group is described by a 16-bit pin mask; all pins of the mask
//! share the same electrical parameters and are written in a single pass
//! over the mode control block. After the register write the group registers
//! itself as the handler for every one of its pins in the port object,
//! replacing any previous owner.
//!
//! ```no_run
//! use stm32f0_hal::{
//!     gpio::{DigitalOutputs, PortA},
//!     pac,
//!     prelude::*,
//! };
//!
//! let mut dp = pac::Peripherals::take().unwrap();
//! let porta = PortA::new(&mut dp.RCC, dp.GPIOA);
//! let mut leds = DigitalOutputs::new(&porta, &[2, 5]);
//! leds.set_high().ok();
//! ```
//!
//! The group also acts as one logical output pin: the embedded HAL digital
//! traits drive every pin of the mask at once.
use core::convert::Infallible;

use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin, ToggleableOutputPin};

use super::port::{GpioPort, PinHandler};
use super::reg::{OutputInit, PIN_COUNT};

/// Drive speed of an output pin
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Speed {
    Low,
    Medium,
    High,
}

/// Electrical drive mode of an output pin
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputType {
    /// Actively drives both logic levels
    PushPull,
    /// Drives only the low level, high needs a pull resistor
    OpenDrain,
}

/// Internal pull resistor selection
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Pull {
    None,
    Up,
    Down,
}

/// Electrical parameters of one output group
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OutputConfig {
    pub speed: Speed,
    pub drive: OutputType,
    pub pull: Pull,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            speed: Speed::Medium,
            drive: OutputType::PushPull,
            pull: Pull::None,
        }
    }
}

/// Merge pin indices into a pin mask
///
/// The indices must be distinct, passing the same index twice is a caller
/// error and is not detected.
pub const fn pin_mask(pins: &[u8]) -> u16 {
    let mut mask = 0;
    let mut i = 0;
    while i < pins.len() {
        mask |= 1 << pins[i];
        i += 1;
    }
    mask
}

/// A group of output pins of one port, initialized together
///
/// The instance stores the mask of its last initialization and is recorded
/// by address in the port's handler table. After moving the instance, call
/// [`init`](Self::init) again to refresh the registration.
pub struct DigitalOutputs<'port, P: GpioPort> {
    port: &'port P,
    pin_ids: u16,
}

impl<'port, P: GpioPort> DigitalOutputs<'port, P> {
    /// Configure `pins` for output with the default electrical parameters
    pub fn new(port: &'port P, pins: &[u8]) -> Self {
        Self::with_config(port, pins, OutputConfig::default())
    }

    /// Configure `pins` for output
    pub fn with_config(port: &'port P, pins: &[u8], config: OutputConfig) -> Self {
        let mut outputs = DigitalOutputs { port, pin_ids: 0 };
        outputs.init(pin_mask(pins), config.speed, config.drive, config.pull);
        outputs
    }

    /// Initialize programmatically with a pin mask
    ///
    /// Fully replaces the result of a previous initialization: the stored
    /// mask is overwritten rather than merged and every pin in `pins` gets
    /// this instance as its handler. Handler entries of pins that are no
    /// longer part of the mask are left alone until some other actor
    /// reclaims them.
    pub fn init(&mut self, pins: u16, speed: Speed, drive: OutputType, pull: Pull) {
        self.pin_ids = pins;
        let init = OutputInit {
            pins,
            speed,
            drive,
            pull,
        };
        self.port.init_outputs(&init);
        for num in 0..PIN_COUNT as u8 {
            if pins & (1 << num) != 0 {
                self.port.set_pin_handler(num, &*self);
            }
        }
    }

    /// Mask of the pins configured by the last initialization
    pub fn pin_ids(&self) -> u16 {
        self.pin_ids
    }

    #[inline]
    pub(crate) fn _set_high(&mut self) {
        self.port.set_pins(self.pin_ids)
    }

    #[inline]
    pub(crate) fn _set_low(&mut self) {
        self.port.clear_pins(self.pin_ids)
    }

    #[inline]
    pub(crate) fn _toggle(&mut self) {
        self.port.toggle_pins(self.pin_ids)
    }
}

impl<P: GpioPort> PinHandler for DigitalOutputs<'_, P> {
    fn handled_pins(&self) -> u16 {
        self.pin_ids
    }
}

//==================================================================================================
//  Embedded HAL traits
//==================================================================================================

impl<P: GpioPort> OutputPin for DigitalOutputs<'_, P> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self._set_high();
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self._set_low();
        Ok(())
    }
}

impl<P: GpioPort> StatefulOutputPin for DigitalOutputs<'_, P> {
    /// True when every pin of the group is set
    #[inline]
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(self.port.output_bits() & self.pin_ids == self.pin_ids)
    }

    /// True when no pin of the group is set
    #[inline]
    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Ok(self.port.output_bits() & self.pin_ids == 0)
    }
}

impl<P: GpioPort> ToggleableOutputPin for DigitalOutputs<'_, P> {
    type Error = Infallible;

    #[inline]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        self._toggle();
        Ok(())
    }
}
