//! potscale Hardware Abstraction Layer
//!
//! Chip-independent types shared by the core logic, the drivers and
//! the chip-specific HAL (`potscale-hal-rp2040`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (potscale-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  potscale-core / potscale-drivers       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  potscale-hal (this crate)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ potscale-hal-     │
//!           │    rp2040         │
//!           └───────────────────┘
//! ```
//!
//! # Contents
//!
//! - [`adc::AdcReader`] - One-shot analog conversion
//! - [`adc::widen_to_u16`] - Resolution scaling to the 16-bit sample domain
//! - [`i2c::I2cConfig`], [`i2c::I2cBusError`] - Bus settings and failures
//! - [`i2c::probe`] - Device presence check

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod i2c;

// Re-export key types at crate root for convenience
pub use adc::{widen_to_u16, AdcError, AdcReader};
pub use i2c::{probe, I2cBusError, I2cConfig};
