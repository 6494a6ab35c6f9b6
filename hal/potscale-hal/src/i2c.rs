//! I2C bus configuration and error taxonomy
//!
//! The display is the only device on the bus. Drivers talk to it through
//! `embedded_hal::i2c::I2c`; this module normalises the errors those
//! implementations report so the rest of the firmware can name them.

use embedded_hal::i2c::{Error, ErrorKind, I2c, NoAcknowledgeSource};

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100kHz standard mode
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error (misplaced start/stop condition)
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// Device did not acknowledge its address
    AddressNack,
    /// Device did not acknowledge a data byte
    DataNack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl I2cBusError {
    /// Classify any `embedded-hal` I2C error
    pub fn from_hal<E: Error>(e: &E) -> Self {
        e.kind().into()
    }
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => I2cBusError::AddressNack,
            ErrorKind::NoAcknowledge(_) => I2cBusError::DataNack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// Check that a device answers at `address`
///
/// Writes `payload`, which must be harmless to the device. Any missing
/// acknowledgment counts as an absent device; controllers do not always
/// report which byte went unanswered.
pub fn probe<I: I2c>(bus: &mut I, address: u8, payload: &[u8]) -> Result<(), I2cBusError> {
    bus.write(address, payload).map_err(|e| match e.kind() {
        ErrorKind::NoAcknowledge(_) => I2cBusError::AddressNack,
        kind => kind.into(),
    })
}

impl core::fmt::Display for I2cBusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            I2cBusError::Bus => "bus error",
            I2cBusError::ArbitrationLost => "arbitration lost",
            I2cBusError::AddressNack => "no device at address",
            I2cBusError::DataNack => "data not acknowledged",
            I2cBusError::Overrun => "overrun",
            I2cBusError::Other => "unknown failure",
        };
        f.write_str(text)
    }
}
