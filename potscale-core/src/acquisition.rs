//! Acquisition loop
//!
//! Steady-state behavior after calibration. Each iteration reads one
//! sample, scales it, and shows raw and scaled values on the console and
//! the display:
//!
//! ```text
//! read -> scale -> format -> console -> draw, present
//!      -> wait cadence -> clear -> wait cadence
//! ```
//!
//! Samples are therefore two cadence delays apart. The loop has one
//! state, [`LoopState::Running`], and leaves it only when the operator
//! aborts or a collaborator fails.

use core::convert::Infallible;
use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::config::{DisplayLayout, RunConfig};
use crate::error::RunError;
use crate::scaling::ScalingTransform;
use crate::traits::{ConsoleError, DisplayError, Operator, PixelColor, PotSensor, TextDisplay};

/// Shown instead of a scaled value too long to render
pub const OVERLONG: &str = "---";

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopState {
    /// Sampling and displaying
    Running,
    /// Stopped by operator abort or a fault
    Terminated,
}

/// One sample and its scaled value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub raw: u16,
    pub scaled: f64,
}

const RAW_LEN: usize = 8;
const SCALED_LEN: usize = 24;
const LINE_PREFIXES: &str = "raw: , scaled: ";
const LINE_LEN: usize = 48;

const _: () = assert!(u16::MAX.ilog10() as usize + 1 <= RAW_LEN);
const _: () = assert!(OVERLONG.len() <= SCALED_LEN);
const _: () = assert!(LINE_PREFIXES.len() + RAW_LEN + SCALED_LEN <= LINE_LEN);

/// Text rendering of a [`Reading`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedReading {
    /// Raw value as an unsigned integer
    pub raw: String<RAW_LEN>,
    /// Scaled value with two decimals
    pub scaled: String<SCALED_LEN>,
}

impl Reading {
    /// Format raw as an integer and scaled to two decimals
    ///
    /// A value that rounds to zero is shown without a sign. Text that does
    /// not fit its buffer is a failed console write.
    pub fn format(&self) -> Result<FormattedReading, ConsoleError> {
        let mut raw = String::new();
        write!(raw, "{}", self.raw).map_err(|_| ConsoleError::Write)?;

        let mut scaled: String<SCALED_LEN> = String::new();
        if write!(scaled, "{:.2}", self.scaled).is_err() {
            scaled.clear();
            scaled.push_str(OVERLONG).map_err(|_| ConsoleError::Write)?;
        }

        if is_negative_zero(&scaled) {
            scaled = String::try_from(&scaled[1..]).map_err(|_| ConsoleError::Write)?;
        }

        Ok(FormattedReading { raw, scaled })
    }
}

impl FormattedReading {
    /// Line written to the console
    pub fn console_line(&self) -> Result<String<LINE_LEN>, ConsoleError> {
        let mut line = String::new();
        write!(line, "raw: {}, scaled: {}", self.raw, self.scaled)
            .map_err(|_| ConsoleError::Write)?;
        Ok(line)
    }
}

fn is_negative_zero(text: &str) -> bool {
    text.strip_prefix('-')
        .is_some_and(|digits| digits.bytes().all(|b| b == b'0' || b == b'.'))
}

/// The acquisition loop and the collaborators it owns
pub struct AcquisitionLoop<S, D, O, K> {
    sensor: S,
    display: D,
    operator: O,
    delay: K,
    transform: ScalingTransform,
    cadence_ms: u32,
    layout: DisplayLayout,
    state: LoopState,
    iterations: u32,
}

impl<S, D, O, K> AcquisitionLoop<S, D, O, K>
where
    S: PotSensor,
    D: TextDisplay,
    O: Operator,
    K: DelayNs,
{
    /// Create a loop around a finished calibration
    pub fn new(
        sensor: S,
        display: D,
        operator: O,
        delay: K,
        transform: ScalingTransform,
        config: &RunConfig,
    ) -> Self {
        Self {
            sensor,
            display,
            operator,
            delay,
            transform,
            cadence_ms: config.acquisition.cadence_ms,
            layout: config.layout,
            state: LoopState::Running,
            iterations: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Completed iterations
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Run one iteration
    pub fn step(&mut self) -> Result<Reading, RunError> {
        let raw = self.sensor.read_u16()?;
        let reading = Reading {
            raw,
            scaled: self.transform.apply(raw as u32),
        };

        let text = reading.format()?;
        self.operator.write_line(&text.console_line()?)?;
        self.show(&text)?;

        self.delay.delay_ms(self.cadence_ms);
        self.iterations = self.iterations.wrapping_add(1);

        Ok(reading)
    }

    /// Draw the four-line layout, hold it for one cadence, then wipe the buffer
    fn show(&mut self, text: &FormattedReading) -> Result<(), DisplayError> {
        let layout = self.layout;
        let lines = [
            layout.scaled_label,
            text.scaled.as_str(),
            layout.raw_label,
            text.raw.as_str(),
        ];

        for (line, y) in lines.iter().zip(layout.rows_px) {
            self.display.draw_text(line, layout.column_px, y, PixelColor::On)?;
        }
        self.display.present()?;

        self.delay.delay_ms(self.cadence_ms);
        self.display.clear(PixelColor::Off)
    }

    /// Iterate until the operator aborts or a collaborator fails
    ///
    /// Never returns `Ok`. The abort is polled once per iteration, before
    /// the sample is read.
    pub fn run(&mut self) -> Result<Infallible, RunError> {
        loop {
            let outcome = match self.operator.abort_requested() {
                Ok(true) => Err(RunError::OperatorAbort),
                Ok(false) => self.step().map(|_| ()),
                Err(e) => Err(e.into()),
            };

            if let Err(e) = outcome {
                self.state = LoopState::Terminated;
                return Err(e);
            }
        }
    }
}
