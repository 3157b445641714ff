//! # Port objects and the per pin handler registry
//!
//! Each GPIO bank is wrapped in a port object which owns the PAC peripheral
//! and a [`PinHandlers`] table with one slot per pin. The table tracks which
//! logical handler object currently drives each pin. Entries are non owning
//! back references: registering never takes ownership, a later registration
//! silently replaces the previous owner, and dropping a handler does not
//! clear its entries.
//!
//! The port objects all implement the sealed [`GpioPort`] trait, which is
//! the seam the GPIO features work against. Port objects use interior
//! mutability for the handler table and are therefore not `Sync`; they are
//! meant to be shared by reference between the features of one bank on a
//! single core. The per pin registration loop of a feature is not atomic as
//! a whole, an interrupt firing mid update can observe a partially updated
//! table.
use core::cell::Cell;
use core::ptr::NonNull;
use paste::paste;

use super::reg::{self, OutputInit, PIN_COUNT};
use crate::clock::{enable_peripheral_clock, PeripheralClocks};
use crate::{pac, Sealed};

/// Implemented by objects which own the behavior of one or more pins of a
/// port
pub trait PinHandler {
    /// Mask of the pins this handler currently drives
    fn handled_pins(&self) -> u16;
}

/// Per pin registry of the handler objects bound to one port
///
/// The registry keeps raw back references recorded at registration time and
/// never dereferences them itself. An entry goes stale once its handler is
/// moved or dropped; callers that dereference an entry must guarantee the
/// handler is still live at its registered address.
pub struct PinHandlers {
    slots: [Cell<Option<NonNull<dyn PinHandler>>>; PIN_COUNT],
}

impl PinHandlers {
    pub(crate) fn new() -> Self {
        PinHandlers {
            slots: core::array::from_fn(|_| Cell::new(None)),
        }
    }

    /// Record `handler` as the owner of pin `num`, replacing any previous
    /// owner
    pub fn set(&self, num: u8, handler: &dyn PinHandler) {
        // Only the address is kept, the registry is pure bookkeeping
        let handler = unsafe {
            core::mem::transmute::<&dyn PinHandler, &'static (dyn PinHandler + 'static)>(handler)
        };
        self.slots[num as usize].set(Some(NonNull::from(handler)));
    }

    /// Current owner of pin `num`
    pub fn get(&self, num: u8) -> Option<NonNull<dyn PinHandler>> {
        self.slots[num as usize].get()
    }

    /// Reclaim pin `num`. Handlers never release their entries themselves
    pub fn clear(&self, num: u8) {
        self.slots[num as usize].set(None);
    }
}

/// Operations the GPIO features need from a port object
pub trait GpioPort: Sealed {
    /// Program every pin selected by the descriptor mask for digital output
    /// in a single pass over the mode control block
    fn init_outputs(&self, init: &OutputInit);

    /// Record `handler` as the owner of pin `num`, replacing any previous
    /// owner
    fn set_pin_handler(&self, num: u8, handler: &dyn PinHandler);

    /// Current owner of pin `num`
    fn pin_handler(&self, num: u8) -> Option<NonNull<dyn PinHandler>>;

    /// Drive every pin in `pins` high
    fn set_pins(&self, pins: u16);

    /// Drive every pin in `pins` low
    fn clear_pins(&self, pins: u16);

    /// Toggle every pin in `pins`
    fn toggle_pins(&self, pins: u16);

    /// Snapshot of the output data register
    fn output_bits(&self) -> u16;
}

macro_rules! ports {
    ($(($PortX:ident, $GPIOX:ident),)+) => {
        paste!(
            $(
                #[doc = "Port object for the " $GPIOX " bank"]
                pub struct $PortX {
                    port: pac::$GPIOX,
                    handlers: PinHandlers,
                }

                impl $PortX {
                    #[doc = "Take ownership of " $GPIOX " and enable its bus clock"]
                    pub fn new(rcc: &mut pac::RCC, port: pac::$GPIOX) -> $PortX {
                        enable_peripheral_clock(rcc, PeripheralClocks::$PortX);
                        $PortX {
                            port,
                            handlers: PinHandlers::new(),
                        }
                    }

                    /// Consume the port object and hand the peripheral back
                    pub fn release(self) -> pac::$GPIOX {
                        self.port
                    }
                }

                impl Sealed for $PortX {}

                impl GpioPort for $PortX {
                    fn init_outputs(&self, init: &OutputInit) {
                        let pins = init.pins;
                        self.port.otyper.modify(|r, w| unsafe {
                            w.bits((r.bits() & !(pins as u32)) | reg::otyper_bits(init.drive, pins))
                        });
                        self.port.ospeedr.modify(|r, w| unsafe {
                            w.bits(reg::fill_field(r.bits(), pins, reg::ospeedr_code(init.speed)))
                        });
                        self.port.pupdr.modify(|r, w| unsafe {
                            w.bits(reg::fill_field(r.bits(), pins, reg::pupdr_code(init.pull)))
                        });
                        // Mode switch comes last so the electrical parameters
                        // are in place before the pins start driving
                        self.port.moder.modify(|r, w| unsafe {
                            w.bits(reg::fill_field(r.bits(), pins, reg::MODER_OUTPUT))
                        });
                    }

                    fn set_pin_handler(&self, num: u8, handler: &dyn PinHandler) {
                        self.handlers.set(num, handler);
                    }

                    fn pin_handler(&self, num: u8) -> Option<NonNull<dyn PinHandler>> {
                        self.handlers.get(num)
                    }

                    fn set_pins(&self, pins: u16) {
                        // Safety: BSRR is write only and zero bits are ignored
                        self.port.bsrr.write(|w| unsafe { w.bits(pins as u32) });
                    }

                    fn clear_pins(&self, pins: u16) {
                        self.port.bsrr.write(|w| unsafe { w.bits((pins as u32) << 16) });
                    }

                    fn toggle_pins(&self, pins: u16) {
                        let odr = self.port.odr.read().bits();
                        let pins = pins as u32;
                        self.port.bsrr.write(|w| unsafe {
                            w.bits(((odr & pins) << 16) | (!odr & pins))
                        });
                    }

                    fn output_bits(&self) -> u16 {
                        (self.port.odr.read().bits() & 0xffff) as u16
                    }
                }
            )+
        );
    }
}

ports!(
    (PortA, GPIOA),
    (PortB, GPIOB),
    (PortC, GPIOC),
    (PortD, GPIOD),
    (PortF, GPIOF),
);

#[cfg(not(feature = "stm32f0x0"))]
ports!((PortE, GPIOE),);

#[cfg(test)]
mod tests {
    use super::*;

    struct Owner(u16);

    impl PinHandler for Owner {
        fn handled_pins(&self) -> u16 {
            self.0
        }
    }

    #[test]
    fn registry_starts_empty() {
        let handlers = PinHandlers::new();
        for num in 0..PIN_COUNT as u8 {
            assert!(handlers.get(num).is_none());
        }
    }

    #[test]
    fn register_overwrites_previous_owner() {
        let handlers = PinHandlers::new();
        let first = Owner(0x0001);
        let second = Owner(0x0001);
        handlers.set(0, &first);
        handlers.set(0, &second);
        let entry = handlers.get(0).unwrap();
        assert_eq!(
            entry.as_ptr() as *const (),
            &second as *const Owner as *const ()
        );
        assert_eq!(unsafe { entry.as_ref() }.handled_pins(), 0x0001);
    }

    #[test]
    fn clear_releases_a_single_slot() {
        let handlers = PinHandlers::new();
        let owner = Owner(0x0006);
        handlers.set(1, &owner);
        handlers.set(2, &owner);
        handlers.clear(1);
        assert!(handlers.get(1).is_none());
        assert!(handlers.get(2).is_some());
    }
}
