//! Test doubles for the bus and delay collaborators

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use heapless::{Deque, Vec};

/// Recording I2C bus
///
/// Writes are logged, reads are answered from a queue (0xFF once the
/// queue is empty, like a released port with nothing attached).
pub struct MockI2c {
    writes: Vec<(u8, u8), 64>,
    replies: Deque<u8, 16>,
    reads: usize,
    present: bool,
}

impl MockI2c {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            replies: Deque::new(),
            reads: 0,
            present: true,
        }
    }

    /// Queue a byte for the next read
    pub fn queue_read(&mut self, value: u8) {
        self.replies.push_back(value).unwrap();
    }

    /// NACK every transaction when absent
    pub fn set_present(&mut self, present: bool) {
        self.present = present;
    }

    pub fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    pub fn last_write(&self) -> Option<u8> {
        self.writes.last().map(|&(_, value)| value)
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
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
                Operation::Write(bytes) => {
                    for &b in bytes.iter() {
                        self.writes.push((address, b)).unwrap();
                    }
                }
                Operation::Read(buf) => {
                    self.reads += 1;
                    for b in buf.iter_mut() {
                        *b = self.replies.pop_front().unwrap_or(0xFF);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Delay that returns immediately and records how long it was asked to wait
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: usize,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.total_ns += ms as u64 * 1_000_000;
        self.calls += 1;
    }
}
