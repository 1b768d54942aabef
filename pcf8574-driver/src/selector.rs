//! Transport selection
//!
//! The host is asked once, at device construction, whether it is a
//! simulator. The answer picks the transport for the device's whole
//! lifetime. A probe that cannot answer selects hardware: simulation is
//! opt-in.

use core::convert::Infallible;

use pcf8574_hal::{ByteBus, HostProbe};

use crate::pin::Pin;
use crate::transport::{BusTransport, MockTransport, Transport};

/// Backend kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportMode {
    /// Real bus transactions
    Hardware,
    /// In-memory latch with injected input levels
    Simulated,
}

impl TransportMode {
    /// Query the host once. Never fails.
    pub fn detect<P: HostProbe>(probe: &P) -> Self {
        match probe.is_simulator() {
            Ok(true) => TransportMode::Simulated,
            Ok(false) => TransportMode::Hardware,
            Err(_) => {
                warn!("host probe failed, assuming hardware");
                TransportMode::Hardware
            }
        }
    }

    /// Check for the simulated backend
    pub const fn is_simulated(self) -> bool {
        matches!(self, TransportMode::Simulated)
    }
}

/// Transport chosen at runtime by [`TransportMode::detect`]
#[derive(Debug)]
pub enum Backend<B> {
    /// Real bus
    Hardware(BusTransport<B>),
    /// In-memory mock; the bus handed to [`Backend::select`] is dropped
    Simulated(MockTransport),
}

impl<B: ByteBus> Backend<B> {
    /// Pick a backend for `bus` based on the host probe
    pub fn select<P: HostProbe>(probe: &P, bus: B) -> Self {
        let mode = TransportMode::detect(probe);
        debug!("transport selected: {}", mode);
        match mode {
            TransportMode::Hardware => Backend::Hardware(BusTransport::new(bus)),
            TransportMode::Simulated => Backend::Simulated(MockTransport::new()),
        }
    }
}

fn absurd<E>(never: Infallible) -> E {
    match never {}
}

impl<B: ByteBus> Transport for Backend<B> {
    type Error = B::Error;

    fn mode(&self) -> TransportMode {
        match self {
            Backend::Hardware(t) => t.mode(),
            Backend::Simulated(t) => t.mode(),
        }
    }

    async fn begin(&mut self, address: u8, latch: u8) -> Result<(), Self::Error> {
        match self {
            Backend::Hardware(t) => t.begin(address, latch).await,
            Backend::Simulated(t) => t.begin(address, latch).await.map_err(absurd),
        }
    }

    async fn write_latch(&mut self, address: u8, latch: u8) -> Result<(), Self::Error> {
        match self {
            Backend::Hardware(t) => t.write_latch(address, latch).await,
            Backend::Simulated(t) => t.write_latch(address, latch).await.map_err(absurd),
        }
    }

    async fn read_port(&mut self, address: u8, latch: u8) -> Result<u8, Self::Error> {
        match self {
            Backend::Hardware(t) => t.read_port(address, latch).await,
            Backend::Simulated(t) => t.read_port(address, latch).await.map_err(absurd),
        }
    }

    fn set_input_level(&mut self, pin: Pin, high: bool) {
        if let Backend::Simulated(t) = self {
            t.set_input_level(pin, high);
        }
    }
}
