//! Run-level error aggregation
//!
//! Every failure that can end a run funnels into [`RunError`]. There are
//! no retries: the first error stops the run. [`RunError::OperatorAbort`]
//! is the expected way out and is treated separately by the supervisor.

use core::fmt;

use potscale_hal::I2cBusError;

use crate::calibration::CalibrationError;
use crate::scaling::ScalingError;
use crate::traits::{ConsoleError, DisplayError, OperatorError, SensorError};

/// Reason a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunError {
    /// Calibration points unusable (e.g. both at the same raw value)
    Scaling(ScalingError),
    /// Calibration settings unusable
    Calibration(CalibrationError),
    /// Sensor failed to produce a reading
    Sensor(SensorError),
    /// Display failed to initialize or accept a frame
    Display(DisplayError),
    /// Bus failed to open or the display did not answer on it
    Bus(I2cBusError),
    /// Console link failed
    Console(ConsoleError),
    /// Operator interrupt
    OperatorAbort,
}

impl RunError {
    /// Name of the collaborator that failed
    pub fn collaborator(&self) -> &'static str {
        match self {
            RunError::Scaling(_) | RunError::Calibration(_) => "calibration",
            RunError::Sensor(_) => "sensor",
            RunError::Display(_) => "display",
            RunError::Bus(_) => "bus",
            RunError::Console(_) => "console",
            RunError::OperatorAbort => "operator",
        }
    }
}

impl From<ScalingError> for RunError {
    fn from(e: ScalingError) -> Self {
        RunError::Scaling(e)
    }
}

impl From<CalibrationError> for RunError {
    fn from(e: CalibrationError) -> Self {
        RunError::Calibration(e)
    }
}

impl From<SensorError> for RunError {
    fn from(e: SensorError) -> Self {
        RunError::Sensor(e)
    }
}

impl From<DisplayError> for RunError {
    fn from(e: DisplayError) -> Self {
        RunError::Display(e)
    }
}

impl From<I2cBusError> for RunError {
    fn from(e: I2cBusError) -> Self {
        RunError::Bus(e)
    }
}

impl From<ConsoleError> for RunError {
    fn from(e: ConsoleError) -> Self {
        RunError::Console(e)
    }
}

impl From<OperatorError> for RunError {
    fn from(e: OperatorError) -> Self {
        match e {
            OperatorError::Aborted => RunError::OperatorAbort,
            OperatorError::Console(e) => RunError::Console(e),
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failure: ", self.collaborator())?;
        match self {
            RunError::Scaling(ScalingError::DegenerateCalibration) => {
                f.write_str("both calibration points share one raw value")
            }
            RunError::Scaling(ScalingError::NonFinite) => {
                f.write_str("calibration point is not a finite number")
            }
            RunError::Calibration(CalibrationError::NoSamples) => {
                f.write_str("sample count must be at least 1")
            }
            RunError::Sensor(SensorError::ConversionError) => f.write_str("conversion error"),
            RunError::Sensor(SensorError::Timeout) => f.write_str("conversion timed out"),
            RunError::Display(DisplayError::Init(e)) => write!(f, "init rejected ({})", e),
            RunError::Display(DisplayError::Write(e)) => write!(f, "frame write failed ({})", e),
            RunError::Bus(e) => write!(f, "{}", e),
            RunError::Console(ConsoleError::Write) => f.write_str("transmit failed"),
            RunError::Console(ConsoleError::Read) => f.write_str("receive failed"),
            RunError::OperatorAbort => f.write_str("aborted"),
        }
    }
}
