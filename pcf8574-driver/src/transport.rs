//! Latch transports
//!
//! A [`Transport`] is where the shadow latch goes when the device pushes it
//! and where port samples come from. Two implementations:
//!
//! - [`BusTransport`] - one-byte I2C transactions via [`ByteBus`]
//! - [`MockTransport`] - in-memory latch with an externally asserted input
//!   snapshot, for hosts without hardware
//!
//! The device never branches on which one it has.

use core::convert::Infallible;

use pcf8574_hal::ByteBus;

use crate::pin::{self, Pin};
use crate::selector::TransportMode;

/// Byte transport for the expander latch
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Error type for transport operations
    type Error;

    /// Which backend this is
    fn mode(&self) -> TransportMode;

    /// Establish the initial latch state
    ///
    /// On hardware this is a plain latch write. The mock additionally
    /// resets its input snapshot to the latch (released pins float high).
    async fn begin(&mut self, address: u8, latch: u8) -> Result<(), Self::Error>;

    /// Push a new latch value
    async fn write_latch(&mut self, address: u8, latch: u8) -> Result<(), Self::Error>;

    /// Sample the observed port value
    ///
    /// `latch` is the current shadow latch; only the mock uses it.
    async fn read_port(&mut self, address: u8, latch: u8) -> Result<u8, Self::Error>;

    /// Externally assert a pin level (simulated backends only)
    ///
    /// Hardware transports ignore this.
    fn set_input_level(&mut self, pin: Pin, high: bool) {
        let _ = (pin, high);
    }
}

/// Hardware transport over a single-byte bus
#[derive(Debug)]
pub struct BusTransport<B> {
    bus: B,
}

impl<B: ByteBus> BusTransport<B> {
    /// Wrap a bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Borrow the bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutably borrow the bus
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: ByteBus> Transport for BusTransport<B> {
    type Error = B::Error;

    fn mode(&self) -> TransportMode {
        TransportMode::Hardware
    }

    async fn begin(&mut self, address: u8, latch: u8) -> Result<(), Self::Error> {
        self.bus.write_byte(address, latch).await
    }

    async fn write_latch(&mut self, address: u8, latch: u8) -> Result<(), Self::Error> {
        self.bus.write_byte(address, latch).await
    }

    async fn read_port(&mut self, address: u8, _latch: u8) -> Result<u8, Self::Error> {
        self.bus.read_byte(address).await
    }
}

/// Simulated transport
///
/// Holds the input snapshot: the level outside circuitry drives on each
/// pin. A pin reads its snapshot level only while released; a pin the
/// device drives low always reads low.
///
/// Latch writes never touch the snapshot. A full-port round trip therefore
/// depends on the snapshot having been seeded, either by `begin` or by
/// [`Transport::set_input_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MockTransport {
    snapshot: u8,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Create a mock with every pin externally high
    pub const fn new() -> Self {
        Self { snapshot: 0xFF }
    }

    /// Current input snapshot
    pub const fn snapshot(&self) -> u8 {
        self.snapshot
    }

    /// Replace the whole input snapshot
    pub fn set_snapshot(&mut self, snapshot: u8) {
        self.snapshot = snapshot;
    }
}

impl Transport for MockTransport {
    type Error = Infallible;

    fn mode(&self) -> TransportMode {
        TransportMode::Simulated
    }

    async fn begin(&mut self, _address: u8, latch: u8) -> Result<(), Infallible> {
        self.snapshot = latch;
        Ok(())
    }

    async fn write_latch(&mut self, _address: u8, _latch: u8) -> Result<(), Infallible> {
        Ok(())
    }

    async fn read_port(&mut self, _address: u8, latch: u8) -> Result<u8, Infallible> {
        Ok(self.snapshot & latch)
    }

    fn set_input_level(&mut self, pin: Pin, high: bool) {
        self.snapshot = pin::with_bit(self.snapshot, pin, high);
    }
}
