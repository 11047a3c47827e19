//! Unified error type for the emulator.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // BLE
    /// The SoftDevice returned a BLE-level error.
    Ble(BleError),

    // Configuration
    /// A tunable in `EmulatorConfig` is out of range.
    InvalidConfig(ConfigField),

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}

/// Subset of BLE errors we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BleError {
    /// Characteristic notification could not be sent.
    NotifyFailed,
    /// Readable characteristic value could not be updated.
    SetValueFailed,
}

/// Which `EmulatorConfig` field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigField {
    FilterAlpha,
    SnapEpsilon,
    NotifyPeriod,
    BlinkPeriod,
}

// Convenience conversions

impl From<BleError> for Error {
    fn from(e: BleError) -> Self {
        Error::Ble(e)
    }
}

impl From<ConfigField> for Error {
    fn from(field: ConfigField) -> Self {
        Error::InvalidConfig(field)
    }
}
