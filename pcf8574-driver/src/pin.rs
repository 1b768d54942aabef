//! Pin indices and latch bit helpers
//!
//! Pins are not objects: all eight share one physical register, so a pin
//! is just a checked bit position in the latch byte.

use crate::error::Error;

/// Number of pins on the expander
pub const PIN_COUNT: u8 = 8;

/// Bounds-checked pin index (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin(u8);

impl Pin {
    /// Create a pin, rejecting indices outside 0-7
    pub const fn new(index: u8) -> Option<Self> {
        if index < PIN_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Pin index
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Single-bit mask for this pin
    pub const fn mask(self) -> u8 {
        1 << self.0
    }

    /// All pins, P0 first
    pub fn all() -> impl Iterator<Item = Pin> {
        (0..PIN_COUNT).map(Pin)
    }
}

impl TryFrom<u8> for Pin {
    type Error = Error<core::convert::Infallible>;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Pin::new(index).ok_or(Error::InvalidPin(index))
    }
}

/// Validate a raw pin index against any bus error type
pub(crate) fn checked<E>(index: u8) -> Result<Pin, Error<E>> {
    Pin::new(index).ok_or(Error::InvalidPin(index))
}

/// Test the bit for `pin`
#[inline]
pub const fn test_bit(byte: u8, pin: Pin) -> bool {
    byte & pin.mask() != 0
}

/// Return `byte` with the bit for `pin` set
#[inline]
pub const fn set_bit(byte: u8, pin: Pin) -> u8 {
    byte | pin.mask()
}

/// Return `byte` with the bit for `pin` cleared
#[inline]
pub const fn clear_bit(byte: u8, pin: Pin) -> u8 {
    byte & !pin.mask()
}

/// Return `byte` with the bit for `pin` set to `high`
#[inline]
pub const fn with_bit(byte: u8, pin: Pin, high: bool) -> u8 {
    if high {
        set_bit(byte, pin)
    } else {
        clear_bit(byte, pin)
    }
}
