//! Error types for the SEN0609 converter

use thiserror::Error;

/// Failures reported by the host's Zigbee transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request timeout")]
    Timeout,

    #[error("Device {0:#06x} unreachable")]
    Unreachable(u16),

    #[error("Device returned error status: {0:#04x}")]
    Status(u8),

    #[error("Transport error: {0}")]
    Other(String),
}

/// Errors surfaced to the host by set/get requests and device configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConverterError {
    /// Field name is not in the attribute registry
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Value violates the field's domain
    #[error("Value {value} out of range for {field} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u16,
        max: u16,
    },

    /// Device does not expose the endpoint the converter talks to
    #[error("Device has no endpoint {0}")]
    MissingEndpoint(u8),

    /// Underlying bind/configure/read/write call did not complete
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),
}
