//! PCF8574 / PCF8574A I/O expander driver
//!
//! Models the chip's single latch byte as eight independent logical pins:
//!
//! - Shadow latch with lazy first-use initialization
//! - Pin and port read/write with quasi-bidirectional semantics
//! - Debounced buttons, active-low/high LEDs, blinking
//! - Hardware or simulated transport, chosen once per device
//!
//! ```ignore
//! use pcf8574_driver::Pcf8574;
//! use pcf8574_hal::StaticProbe;
//!
//! let mut io = Pcf8574::create(0x20, &StaticProbe::HARDWARE, i2c, embassy_time::Delay);
//! io.led(3, true).await?;
//! if io.button_pressed(0).await? {
//!     io.blink(3, 2, 200).await?;
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod device;
pub mod error;
pub mod pin;
pub mod selector;
pub mod transport;

#[cfg(test)]
mod mock;

pub use config::{DeviceConfig, Variant, DEFAULT_DEBOUNCE_MS};
pub use device::{Pcf8574, POWER_ON_LATCH};
pub use error::{ConfigError, Error};
pub use pin::Pin;
pub use selector::{Backend, TransportMode};
pub use transport::{BusTransport, MockTransport, Transport};
