//! PCF8574 device
//!
//! The chip has no direction register. One latch byte does everything:
//!
//! - bit = 0: pin actively driven low
//! - bit = 1: pin released to a weak pull-up, readable as an input
//!
//! [`Pcf8574`] keeps a shadow copy of that byte and derives every pin
//! operation from it. The first operation on a fresh device pushes the
//! power-on latch (0xFF) to the transport; there is no separate setup step
//! callers have to remember.
//!
//! # Button and LED wiring
//!
//! Buttons are expected between pin and GND (pressed = low). LEDs default to
//! active-low wiring (VCC -> resistor -> LED -> pin), since the chip sinks far
//! more current than it sources.

use embedded_hal_async::delay::DelayNs;
use pcf8574_hal::{ByteBus, HostProbe};

use crate::config::DeviceConfig;
use crate::error::{ConfigError, Error};
use crate::pin::{self, Pin};
use crate::selector::{Backend, TransportMode};
use crate::transport::Transport;

/// Power-on latch value: every pin released
pub const POWER_ON_LATCH: u8 = 0xFF;

/// One expander chip at a fixed bus address
///
/// All operations take `&mut self`. The latch is read-modify-written across
/// an await point, so sharing a device between tasks needs an external lock.
pub struct Pcf8574<T, D> {
    config: DeviceConfig,
    transport: T,
    delay: D,
    /// Shadow latch, kept equal to the last value pushed
    latch: u8,
    initialized: bool,
}

impl<B: ByteBus, D: DelayNs> Pcf8574<Backend<B>, D> {
    /// Create a device, letting the host decide between bus and simulator
    ///
    /// The address is not checked; see [`Pcf8574::from_config`].
    pub fn create<P: HostProbe>(address: u8, probe: &P, bus: B, delay: D) -> Self {
        Self::new(DeviceConfig::new(address), Backend::select(probe, bus), delay)
    }

    /// Create a device from a validated configuration
    pub fn from_config<P: HostProbe>(
        config: DeviceConfig,
        probe: &P,
        bus: B,
        delay: D,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, Backend::select(probe, bus), delay))
    }
}

impl<T: Transport, D: DelayNs> Pcf8574<T, D> {
    /// Create a device on an explicit transport
    pub fn new(config: DeviceConfig, transport: T, delay: D) -> Self {
        Self {
            config,
            transport,
            delay,
            latch: POWER_ON_LATCH,
            initialized: false,
        }
    }

    /// Bus address
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Device configuration
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Current shadow latch
    pub fn latch(&self) -> u8 {
        self.latch
    }

    /// Check if `begin` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Backend kind, fixed at construction
    pub fn mode(&self) -> TransportMode {
        self.transport.mode()
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give back the transport and delay
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    /// Push the shadow latch to the transport and mark the device initialized
    ///
    /// Safe to call again: it re-pushes the current latch. Call it explicitly
    /// after a transport failure to resynchronize the chip with the shadow.
    pub async fn begin(&mut self) -> Result<(), Error<T::Error>> {
        let latch = self.latch;
        self.transport
            .begin(self.config.address, latch)
            .await
            .map_err(Error::Bus)?;
        self.initialized = true;
        debug!(
            "pcf8574 {=u8:#x}: begin, latch {=u8:#b}",
            self.config.address, latch
        );
        Ok(())
    }

    async fn ensure_init(&mut self) -> Result<(), Error<T::Error>> {
        if !self.initialized {
            self.begin().await?;
        }
        Ok(())
    }

    async fn push_latch(&mut self) -> Result<(), Error<T::Error>> {
        self.transport
            .write_latch(self.config.address, self.latch)
            .await
            .map_err(Error::Bus)
    }

    /// Sample all eight pins
    ///
    /// A pin this device drives low reads low no matter what is attached.
    pub async fn read_port(&mut self) -> Result<u8, Error<T::Error>> {
        self.ensure_init().await?;
        self.transport
            .read_port(self.config.address, self.latch)
            .await
            .map_err(Error::Bus)
    }

    /// Replace the whole latch
    pub async fn write_port(&mut self, value: u8) -> Result<(), Error<T::Error>> {
        self.ensure_init().await?;
        self.latch = value;
        self.push_latch().await
    }

    /// Read one pin
    ///
    /// If the pin is currently driven low it is released first, so the read
    /// reflects the external level. The pin stays released afterwards.
    pub async fn read_pin(&mut self, pin: u8) -> Result<bool, Error<T::Error>> {
        let pin = pin::checked(pin)?;
        self.ensure_init().await?;
        if !pin::test_bit(self.latch, pin) {
            self.latch = pin::set_bit(self.latch, pin);
            self.push_latch().await?;
        }
        let port = self.read_port().await?;
        Ok(pin::test_bit(port, pin))
    }

    /// Drive one pin
    ///
    /// `high = true` releases the pin to its pull-up, `false` drives it low.
    /// Each call pushes the full latch.
    pub async fn write_pin(&mut self, pin: u8, high: bool) -> Result<(), Error<T::Error>> {
        let pin = pin::checked(pin)?;
        self.ensure_init().await?;
        self.latch = pin::with_bit(self.latch, pin, high);
        self.push_latch().await
    }

    /// Release a pin for use as an input
    pub async fn set_input(&mut self, pin: u8) -> Result<(), Error<T::Error>> {
        self.write_pin(pin, true).await
    }

    /// Drive a pin low
    pub async fn set_output_low(&mut self, pin: u8) -> Result<(), Error<T::Error>> {
        self.write_pin(pin, false).await
    }

    /// Check a button with the configured debounce window
    pub async fn button_pressed(&mut self, pin: u8) -> Result<bool, Error<T::Error>> {
        let debounce_ms = self.config.debounce_ms;
        self.button_pressed_with_debounce(pin, debounce_ms).await
    }

    /// Check a button wired pin -> GND
    ///
    /// A low read is confirmed by a second read after `debounce_ms`; with a
    /// zero window the first low read is trusted. A high read returns
    /// immediately. Reading leaves the pin configured as an input.
    pub async fn button_pressed_with_debounce(
        &mut self,
        pin: u8,
        debounce_ms: u32,
    ) -> Result<bool, Error<T::Error>> {
        if self.read_pin(pin).await? {
            return Ok(false);
        }
        if debounce_ms == 0 {
            return Ok(true);
        }

        self.delay.delay_ms(debounce_ms).await;
        let still_low = !self.read_pin(pin).await?;
        if !still_low {
            trace!("pcf8574 pin {=u8}: press rejected by debounce", pin);
        }
        Ok(still_low)
    }

    /// Switch an LED using the configured polarity
    pub async fn led(&mut self, pin: u8, on: bool) -> Result<(), Error<T::Error>> {
        let active_low = self.config.led_active_low;
        self.led_with_polarity(pin, on, active_low).await
    }

    /// Switch an LED
    ///
    /// Active-low: on = pin driven low. Active-high: on = pin released high.
    /// Do not `read_pin` an LED pin; reading releases it.
    pub async fn led_with_polarity(
        &mut self,
        pin: u8,
        on: bool,
        active_low: bool,
    ) -> Result<(), Error<T::Error>> {
        let drive_low = if active_low { on } else { !on };
        self.write_pin(pin, !drive_low).await
    }

    /// Blink an LED `times` times, one `period_ms` per cycle
    ///
    /// Ends with the LED off.
    pub async fn blink(
        &mut self,
        pin: u8,
        times: u16,
        period_ms: u32,
    ) -> Result<(), Error<T::Error>> {
        let on_ms = period_ms / 2;
        let off_ms = period_ms - on_ms;
        for _ in 0..times {
            self.led(pin, true).await?;
            self.delay.delay_ms(on_ms).await;
            self.led(pin, false).await?;
            self.delay.delay_ms(off_ms).await;
        }
        // Zero cycles still leaves the LED off
        if times == 0 {
            self.led(pin, false).await?;
        }
        Ok(())
    }

    /// Simulate an external high level on a pin (no-op on hardware)
    pub async fn set_mock_pin_high(&mut self, pin: u8) -> Result<(), Error<T::Error>> {
        self.set_mock_pin(pin, true).await
    }

    /// Simulate an external low level on a pin, e.g. a button press
    /// (no-op on hardware)
    pub async fn set_mock_pin_low(&mut self, pin: u8) -> Result<(), Error<T::Error>> {
        self.set_mock_pin(pin, false).await
    }

    async fn set_mock_pin(&mut self, pin: u8, high: bool) -> Result<(), Error<T::Error>> {
        let pin: Pin = pin::checked(pin)?;
        if !self.transport.mode().is_simulated() {
            return Ok(());
        }
        // Init first: a lazy begin later would reset the snapshot
        self.ensure_init().await?;
        self.transport.set_input_level(pin, high);
        Ok(())
    }
}
