//! Driver error types

/// Errors from device operations
///
/// `E` is the transport's own error type and is passed through untouched.
/// Nothing at this layer retries or suppresses a bus failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus transaction failed (device absent, NACK, bus fault)
    Bus(E),
    /// Pin index outside 0-7
    InvalidPin(u8),
}

impl<E> Error<E> {
    /// Returns the bus error, if this is one
    pub fn bus(&self) -> Option<&E> {
        match self {
            Error::Bus(e) => Some(e),
            Error::InvalidPin(_) => None,
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::InvalidPin(pin) => write!(f, "invalid pin index {} (expected 0-7)", pin),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Address outside both 0x20-0x27 and 0x38-0x3F
    AddressOutOfRange(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::AddressOutOfRange(addr) => write!(
                f,
                "address {:#04x} outside 0x20-0x27 (PCF8574) and 0x38-0x3F (PCF8574A)",
                addr
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_accessor() {
        let err: Error<u8> = Error::Bus(7);
        assert_eq!(err.bus(), Some(&7));

        let err: Error<u8> = Error::InvalidPin(9);
        assert_eq!(err.bus(), None);
    }
}
