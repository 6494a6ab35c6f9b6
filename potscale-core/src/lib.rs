//! Board-agnostic core logic for the potscale firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (sensor, display, console, operator)
//! - Linear scaling between two calibration points
//! - Minimum-position calibration
//! - The acquisition loop and its display layout
//! - Run supervision (operator abort vs. fault)
//! - Compile-time configuration

#![no_std]
#![deny(unsafe_code)]

pub mod acquisition;
pub mod calibration;
pub mod config;
pub mod error;
pub mod scaling;
pub mod supervisor;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use acquisition::{AcquisitionLoop, FormattedReading, LoopState, Reading};
pub use calibration::{CalibrationError, Calibrator};
pub use config::RunConfig;
pub use error::RunError;
pub use scaling::{scale, slope, CalibrationPoint, ScalingError, ScalingTransform};
pub use supervisor::{run, supervise, Board, Exit};
