//! Run supervision
//!
//! [`run`] performs the whole program: calibrate once, build the
//! transform, then hand over to the acquisition loop. [`supervise`] turns
//! the way the run ended into an [`Exit`], separating the operator's
//! abort from genuine faults.

use core::convert::Infallible;
use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::acquisition::AcquisitionLoop;
use crate::calibration::Calibrator;
use crate::config::RunConfig;
use crate::error::RunError;
use crate::scaling::ScalingTransform;
use crate::traits::{Console, Operator, PotSensor, TextDisplay};

const FAULT_LINE_LEN: usize = 96;

// The short form must always fit; "calibration" is the longest collaborator name
const _: () = assert!("fatal: calibration failure".len() <= FAULT_LINE_LEN);

/// The collaborators a run needs
///
/// Pass `&mut` references to keep using the hardware after the run ends.
pub struct Board<S, D, O, K> {
    pub sensor: S,
    pub display: D,
    pub operator: O,
    pub delay: K,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Exit {
    /// Operator abort: stop quietly
    Stopped,
    /// Anything else
    Fault(RunError),
}

/// Calibrate, then acquire until interrupted
pub fn run<S, D, O, K>(
    board: Board<S, D, O, K>,
    config: &RunConfig,
) -> Result<Infallible, RunError>
where
    S: PotSensor,
    D: TextDisplay,
    O: Operator,
    K: DelayNs,
{
    let Board {
        mut sensor,
        display,
        mut operator,
        mut delay,
    } = board;

    let calibrator = Calibrator::from_config(&config.calibration)?;
    let min_pot_value = calibrator.calibrate(&mut sensor, &mut delay, &mut operator)?;
    let transform = ScalingTransform::from_min_pot_value(min_pot_value, &config.scale)?;

    AcquisitionLoop::new(sensor, display, operator, delay, transform, config).run()
}

/// Classify the end of a run
pub fn supervise(outcome: Result<Infallible, RunError>) -> Exit {
    match outcome {
        Ok(never) => match never {},
        Err(RunError::OperatorAbort) => Exit::Stopped,
        Err(e) => Exit::Fault(e),
    }
}

/// Write a one-line diagnostic for a fault
///
/// Best effort: if the console itself is what failed, nothing is written.
pub fn report_fault<C: Console>(console: &mut C, error: &RunError) {
    let mut line: String<FAULT_LINE_LEN> = String::new();
    let rendered = write!(line, "fatal: {}", error).or_else(|_| {
        line.clear();
        write!(line, "fatal: {} failure", error.collaborator())
    });
    if rendered.is_ok() {
        // Nowhere left to report a failing console
        let _ = console.write_line(&line);
    }
}
