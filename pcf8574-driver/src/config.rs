//! Device configuration
//!
//! The two chip variants differ only in their address block. Three
//! strap pins (A2..A0) select one of eight addresses inside the block.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default debounce window for button reads (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 20;

/// Chip variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    /// PCF8574, addresses 0x20-0x27
    Pcf8574,
    /// PCF8574A, addresses 0x38-0x3F
    Pcf8574A,
}

impl Variant {
    /// Address with all strap pins low
    pub const fn base_address(self) -> u8 {
        match self {
            Variant::Pcf8574 => 0x20,
            Variant::Pcf8574A => 0x38,
        }
    }

    /// Address for the given A2..A0 strap value (only the low 3 bits are used)
    pub const fn address(self, straps: u8) -> u8 {
        self.base_address() | (straps & 0x07)
    }

    /// Check if `address` lies in this variant's block
    pub const fn contains(self, address: u8) -> bool {
        address & !0x07 == self.base_address()
    }

    /// Identify the variant from an address
    pub const fn from_address(address: u8) -> Option<Self> {
        if Variant::Pcf8574.contains(address) {
            Some(Variant::Pcf8574)
        } else if Variant::Pcf8574A.contains(address) {
            Some(Variant::Pcf8574A)
        } else {
            None
        }
    }
}

/// Per-device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    /// 7-bit bus address
    pub address: u8,
    /// Debounce window used by `button_pressed` (0 disables the re-check)
    pub debounce_ms: u32,
    /// LEDs are wired pin -> LED -> VCC (on = pin driven low)
    pub led_active_low: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::new(Variant::Pcf8574.base_address())
    }
}

impl DeviceConfig {
    /// Create a config with default debounce and active-low LEDs
    pub const fn new(address: u8) -> Self {
        Self {
            address,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            led_active_low: true,
        }
    }

    /// Set the button debounce window
    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Set LED polarity
    pub const fn with_led_active_low(mut self, active_low: bool) -> Self {
        self.led_active_low = active_low;
        self
    }

    /// Check the address against both chip variants
    pub fn validate(&self) -> Result<Variant, ConfigError> {
        Variant::from_address(self.address).ok_or(ConfigError::AddressOutOfRange(self.address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_ranges() {
        for a in 0x20..=0x27 {
            assert_eq!(Variant::from_address(a), Some(Variant::Pcf8574));
        }
        for a in 0x38..=0x3F {
            assert_eq!(Variant::from_address(a), Some(Variant::Pcf8574A));
        }
        assert_eq!(Variant::from_address(0x1F), None);
        assert_eq!(Variant::from_address(0x28), None);
        assert_eq!(Variant::from_address(0x37), None);
        assert_eq!(Variant::from_address(0x40), None);
    }

    #[test]
    fn test_strap_addressing() {
        assert_eq!(Variant::Pcf8574.address(0b000), 0x20);
        assert_eq!(Variant::Pcf8574.address(0b111), 0x27);
        assert_eq!(Variant::Pcf8574A.address(0b101), 0x3D);
        // Extra bits are ignored
        assert_eq!(Variant::Pcf8574A.address(0xFF), 0x3F);
    }

    #[test]
    fn test_default_config() {
        let config = DeviceConfig::default();
        assert_eq!(config.address, 0x20);
        assert_eq!(config.debounce_ms, 20);
        assert!(config.led_active_low);
    }

    #[test]
    fn test_builder() {
        let config = DeviceConfig::new(0x3A)
            .with_debounce_ms(0)
            .with_led_active_low(false);
        assert_eq!(config.debounce_ms, 0);
        assert!(!config.led_active_low);
        assert_eq!(config.validate(), Ok(Variant::Pcf8574A));
    }

    #[test]
    fn test_validate_rejects_foreign_address() {
        assert_eq!(
            DeviceConfig::new(0x50).validate(),
            Err(ConfigError::AddressOutOfRange(0x50))
        );
    }
}
