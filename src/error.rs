//! Error types for the strobe buffer and its strip drivers.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or writing to a strobe buffer.
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel index outside the buffer.
    #[error("Pixel index {index} out of range (capacity {capacity})")]
    IndexOutOfRange { index: usize, capacity: usize },

    /// Configured pixel count does not match the fixed buffer capacity.
    #[error("Configured pixel count {configured} does not match buffer capacity {capacity}")]
    ConfigurationMismatch { configured: usize, capacity: usize },

    /// Unrecognised color layout tag.
    #[error("Invalid color layout: {0}")]
    InvalidLayout(String),

    /// Unrecognised serial framing protocol.
    #[error("Invalid protocol: {0}")]
    InvalidProtocol(String),

    /// Serial port could not be opened or configured.
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),
}
