//! PCF8574 Hardware Abstraction Layer
//!
//! This crate defines the two collaborators the expander driver consumes
//! but does not implement: the byte-oriented bus and the host environment
//! query that decides between real hardware and a simulated latch.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pcf8574-driver (latch + pin semantics) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pcf8574-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal- │       │ host probe    │
//! │ async I2C bus │       │ (env, static) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::ByteBus`] - Single-byte write/read to a 7-bit address
//! - [`host::HostProbe`] - Simulator detection

#![no_std]
#![deny(unsafe_code)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod host;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use host::{HostProbe, StaticProbe};
pub use i2c::ByteBus;

#[cfg(feature = "std")]
pub use host::{EnvProbe, EnvProbeError};
