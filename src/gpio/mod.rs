//! # GPIO module
//!
//! This module provides mask based configuration of whole groups of GPIO
//! output pins. It is built from three pieces: the [`port`] submodule wraps
//! each GPIO bank in a port object which owns the PAC peripheral and a per
//! pin handler registry, the [`outputs`] submodule provides the
//! [`DigitalOutputs`] feature which programs a set of pins of one port for
//! digital output in a single initialization pass, and a private register
//! submodule holds the field math shared by all ports.
//!
//! Unlike a type-level per pin API, a [`DigitalOutputs`] group is
//! parameterized at run-time by a 16-bit pin mask. All pins of the mask are
//! written with the same electrical parameters in one pass over the mode
//! control block, and the group registers itself as the handler for every
//! one of its pins in the port object.
//!
//! ## Examples
//!
//! - Blinky example in `demos/blinky.rs`
pub mod outputs;
pub use outputs::*;

pub mod port;
pub use port::*;

mod reg;
pub use reg::{OutputInit, PIN_COUNT};
