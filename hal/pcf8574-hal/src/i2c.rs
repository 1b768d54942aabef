//! I2C bus abstractions
//!
//! The expander only ever moves one byte per transaction: a write sets the
//! whole latch, a read samples all eight pins. [`ByteBus`] captures exactly
//! that and is implemented for every `embedded-hal-async` I2C master.

use embedded_hal_async::i2c::{I2c, SevenBitAddress};

/// Single-byte I2C master
///
/// Each call is one complete bus transaction. No multi-byte bursts and no
/// repeated-start sequences.
#[allow(async_fn_in_trait)]
pub trait ByteBus {
    /// Error type for bus operations
    type Error;

    /// Write one byte to the device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `value` - Byte to write
    async fn write_byte(&mut self, address: SevenBitAddress, value: u8)
        -> Result<(), Self::Error>;

    /// Read one byte from the device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    async fn read_byte(&mut self, address: SevenBitAddress) -> Result<u8, Self::Error>;
}

impl<T: I2c> ByteBus for T {
    type Error = T::Error;

    async fn write_byte(&mut self, address: SevenBitAddress, value: u8) -> Result<(), T::Error> {
        I2c::write(self, address, &[value]).await
    }

    async fn read_byte(&mut self, address: SevenBitAddress) -> Result<u8, T::Error> {
        let mut buf = [0u8; 1];
        I2c::read(self, address, &mut buf).await?;
        Ok(buf[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal_async::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

    /// Bus that answers a fixed byte and remembers the last write
    struct EchoBus {
        last_write: Option<(u8, u8)>,
        reply: u8,
        present: bool,
    }

    impl ErrorType for EchoBus {
        type Error = ErrorKind;
    }

    impl I2c for EchoBus {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if !self.present {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.last_write = Some((address, bytes[0])),
                    Operation::Read(buf) => buf.fill(self.reply),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_write_byte_is_single_byte_write() {
        let mut bus = EchoBus {
            last_write: None,
            reply: 0,
            present: true,
        };
        block_on(bus.write_byte(0x20, 0xA5)).unwrap();
        assert_eq!(bus.last_write, Some((0x20, 0xA5)));
    }

    #[test]
    fn test_read_byte() {
        let mut bus = EchoBus {
            last_write: None,
            reply: 0x3C,
            present: true,
        };
        assert_eq!(block_on(bus.read_byte(0x38)), Ok(0x3C));
    }

    #[test]
    fn test_nack_propagates() {
        let mut bus = EchoBus {
            last_write: None,
            reply: 0,
            present: false,
        };
        assert_eq!(
            block_on(bus.read_byte(0x27)),
            Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
        );
        assert!(block_on(bus.write_byte(0x27, 0xFF)).is_err());
    }
}
