//! Harness configuration.

/// Configuration for loading and running a validation module.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Wasmtime fuel limit (instruction metering).
    /// Bounds a misbehaving guest: exhaustion surfaces as
    /// `HostError::FuelExhausted` instead of blocking forever.
    pub fuel_limit: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            fuel_limit: 100_000_000,
        }
    }
}
