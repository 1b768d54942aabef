//! Host environment query
//!
//! Whether a device talks to real silicon or to an in-memory latch is a
//! fact about the host, not about the device. A [`HostProbe`] answers it
//! once per device construction.

/// Simulator detection
pub trait HostProbe {
    /// Error reported when the host cannot answer
    type Error;

    /// Returns `Ok(true)` when running against a simulated backend
    fn is_simulator(&self) -> Result<bool, Self::Error>;
}

/// Probe with a fixed answer
///
/// Used by boards that know at compile time what they are, and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StaticProbe {
    simulated: bool,
}

impl StaticProbe {
    /// Real hardware
    pub const HARDWARE: Self = Self { simulated: false };

    /// Simulated backend
    pub const SIMULATOR: Self = Self { simulated: true };

    /// Create a probe with the given answer
    pub const fn new(simulated: bool) -> Self {
        Self { simulated }
    }
}

impl HostProbe for StaticProbe {
    type Error = core::convert::Infallible;

    fn is_simulator(&self) -> Result<bool, Self::Error> {
        Ok(self.simulated)
    }
}

/// Probe backed by a process environment variable (host builds only)
///
/// The variable must hold `1`/`true` or `0`/`false`. A missing variable or
/// any other value is reported as an error.
#[cfg(any(test, feature = "std"))]
#[derive(Debug, Clone, Copy)]
pub struct EnvProbe {
    var: &'static str,
}

#[cfg(any(test, feature = "std"))]
impl EnvProbe {
    /// Default variable name
    pub const DEFAULT_VAR: &'static str = "PCF8574_SIMULATOR";

    /// Probe the given variable
    pub const fn new(var: &'static str) -> Self {
        Self { var }
    }
}

#[cfg(any(test, feature = "std"))]
impl Default for EnvProbe {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

/// Why the environment probe could not answer
#[cfg(any(test, feature = "std"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvProbeError {
    /// Variable not set or not unicode
    Missing,
    /// Variable set to something other than a boolean
    Unrecognized,
}

#[cfg(any(test, feature = "std"))]
impl HostProbe for EnvProbe {
    type Error = EnvProbeError;

    fn is_simulator(&self) -> Result<bool, Self::Error> {
        let value = std::env::var(self.var).map_err(|_| EnvProbeError::Missing)?;
        match value.trim() {
            "1" | "true" | "TRUE" | "yes" => Ok(true),
            "0" | "false" | "FALSE" | "no" => Ok(false),
            _ => Err(EnvProbeError::Unrecognized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_probe() {
        assert_eq!(StaticProbe::HARDWARE.is_simulator(), Ok(false));
        assert_eq!(StaticProbe::SIMULATOR.is_simulator(), Ok(true));
        assert_eq!(StaticProbe::default(), StaticProbe::HARDWARE);
        assert_eq!(StaticProbe::new(true), StaticProbe::SIMULATOR);
    }

    #[test]
    fn test_env_probe_missing_variable() {
        let probe = EnvProbe::new("PCF8574_HAL_TEST_UNSET_VARIABLE");
        assert_eq!(probe.is_simulator(), Err(EnvProbeError::Missing));
    }

    #[test]
    fn test_env_probe_simulator() {
        std::env::set_var("PCF8574_HAL_TEST_SIMULATOR", "1");
        let probe = EnvProbe::new("PCF8574_HAL_TEST_SIMULATOR");
        assert_eq!(probe.is_simulator(), Ok(true));
    }

    #[test]
    fn test_env_probe_hardware() {
        std::env::set_var("PCF8574_HAL_TEST_HARDWARE", "false");
        let probe = EnvProbe::new("PCF8574_HAL_TEST_HARDWARE");
        assert_eq!(probe.is_simulator(), Ok(false));
    }

    #[test]
    fn test_env_probe_unrecognized_value() {
        std::env::set_var("PCF8574_HAL_TEST_GARBAGE", "maybe");
        let probe = EnvProbe::new("PCF8574_HAL_TEST_GARBAGE");
        assert_eq!(probe.is_simulator(), Err(EnvProbeError::Unrecognized));
    }
}
