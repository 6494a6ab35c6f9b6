//! Minimum-position calibration
//!
//! The operator turns the potentiometer to its physical minimum and the
//! calibrator averages a burst of readings there. The mean becomes the raw
//! coordinate of the low calibration point.
//!
//! The pass is paced by the operator: it waits for an acknowledgment
//! before sampling and again before handing control back.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::config::CalibrationConfig;
use crate::error::RunError;
use crate::traits::{ConsoleError, Operator, PotSensor};

const SUMMARY_LEN: usize = 64;

// The mean of u16 readings prints as at most "65535.0"
const _: () = assert!(SUMMARY_LABEL.len() + "65535.0".len() <= SUMMARY_LEN);

/// Prompt shown before sampling starts
pub const START_PROMPT: &str =
    "Turn pot fully counterclockwise, then press <ENTER> to calibrate pot minimum";

/// Status line shown while sampling
pub const SAMPLING_STATUS: &str = "Calibrating...";

/// Label in front of the calibrated minimum
pub const SUMMARY_LABEL: &str = "average low x1, minPotValue: ";

/// Prompt shown after the result
pub const CONTINUE_PROMPT: &str = "Hit <ENTER> to continue";

/// Errors in the calibration settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// Sample count was zero
    NoSamples,
}

/// Averages readings at the potentiometer's minimum position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibrator {
    sample_count: u32,
    sample_delay_ms: u32,
}

impl Calibrator {
    /// Create a calibrator taking `sample_count` readings, `sample_delay_ms` apart
    pub fn new(sample_count: u32, sample_delay_ms: u32) -> Result<Self, CalibrationError> {
        if sample_count == 0 {
            return Err(CalibrationError::NoSamples);
        }

        Ok(Self {
            sample_count,
            sample_delay_ms,
        })
    }

    pub fn from_config(config: &CalibrationConfig) -> Result<Self, CalibrationError> {
        Self::new(config.sample_count, config.sample_delay_ms)
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Run the calibration pass and return the mean raw reading
    ///
    /// Blocks on the operator twice. Sensor and console failures propagate
    /// unchanged; an operator abort, at a prompt or between samples,
    /// returns [`RunError::OperatorAbort`].
    pub fn calibrate<S, D, O>(
        &self,
        sensor: &mut S,
        delay: &mut D,
        operator: &mut O,
    ) -> Result<f64, RunError>
    where
        S: PotSensor,
        D: DelayNs,
        O: Operator,
    {
        operator.await_acknowledgment(START_PROMPT)?;
        operator.write_line(SAMPLING_STATUS)?;

        // f64 holds any sum of u16 samples exactly up to 2^37 readings
        let mut total = 0.0f64;
        for i in 0..self.sample_count {
            if i > 0 {
                if operator.abort_requested()? {
                    return Err(RunError::OperatorAbort);
                }
                delay.delay_ms(self.sample_delay_ms);
            }
            total += sensor.read_u16()? as f64;
        }
        let mean = total / self.sample_count as f64;

        let mut line: String<SUMMARY_LEN> = String::new();
        write!(line, "{}{:.1}", SUMMARY_LABEL, mean).map_err(|_| ConsoleError::Write)?;
        operator.write_line(&line)?;

        operator.await_acknowledgment(CONTINUE_PROMPT)?;
        Ok(mean)
    }
}
