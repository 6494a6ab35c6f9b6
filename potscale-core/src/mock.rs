//! Test doubles shared by the unit tests
//!
//! Every double appends to one [`Log`] so tests can assert on the exact
//! interleaving of sensor, console, display and clock activity.

use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};

use crate::traits::{
    Console, ConsoleError, DisplayError, Operator, OperatorError, PixelColor, PotSensor,
    SensorError, TextDisplay,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Read,
    Line,
    Prompt,
    Draw(i32),
    Present,
    Clear(PixelColor),
    Delay(u32),
}

pub type Log = RefCell<Vec<Event, 256>>;

fn record(log: &Log, event: Event) {
    log.borrow_mut().push(event).expect("event log full");
}

pub struct MockSensor<'a> {
    log: &'a Log,
    readings: &'a [u16],
    fail_at: Option<u32>,
    pub reads: u32,
}

impl<'a> MockSensor<'a> {
    pub fn new(log: &'a Log, readings: &'a [u16]) -> Self {
        Self {
            log,
            readings,
            fail_at: None,
            reads: 0,
        }
    }

    /// Fail the read with this zero-based index
    pub fn failing_at(mut self, index: u32) -> Self {
        self.fail_at = Some(index);
        self
    }
}

impl PotSensor for MockSensor<'_> {
    fn read_u16(&mut self) -> Result<u16, SensorError> {
        if self.fail_at == Some(self.reads) {
            return Err(SensorError::ConversionError);
        }
        let value = self.readings[self.reads as usize % self.readings.len()];
        self.reads += 1;
        record(self.log, Event::Read);
        Ok(value)
    }
}

pub struct MockDisplay<'a> {
    log: &'a Log,
    frame: Vec<(String<24>, i32, i32, PixelColor), 8>,
    /// Text of the most recently presented frame
    pub presented: Vec<(String<24>, i32, i32, PixelColor), 8>,
    pub presents: u32,
    pub clears: u32,
    fail_present: bool,
}

impl<'a> MockDisplay<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            frame: Vec::new(),
            presented: Vec::new(),
            presents: 0,
            clears: 0,
            fail_present: false,
        }
    }

    pub fn failing_present(mut self) -> Self {
        self.fail_present = true;
        self
    }
}

impl TextDisplay for MockDisplay<'_> {
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: PixelColor,
    ) -> Result<(), DisplayError> {
        record(self.log, Event::Draw(y));
        let mut s = String::new();
        s.push_str(text).expect("text too long for mock");
        self.frame.push((s, x, y, color)).expect("frame full");
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        if self.fail_present {
            return Err(DisplayError::Write(potscale_hal::I2cBusError::DataNack));
        }
        record(self.log, Event::Present);
        self.presented = self.frame.clone();
        self.presents += 1;
        Ok(())
    }

    fn clear(&mut self, color: PixelColor) -> Result<(), DisplayError> {
        record(self.log, Event::Clear(color));
        self.frame.clear();
        self.clears += 1;
        Ok(())
    }
}

pub struct MockTerminal<'a> {
    log: &'a Log,
    pub lines: Vec<String<64>, 16>,
    pub prompts: Vec<String<96>, 4>,
    polls: u32,
    abort_after_polls: Option<u32>,
    abort_at_prompt: Option<usize>,
}

impl<'a> MockTerminal<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            lines: Vec::new(),
            prompts: Vec::new(),
            polls: 0,
            abort_after_polls: None,
            abort_at_prompt: None,
        }
    }

    /// Report an abort on every poll after the first `polls`
    pub fn aborting_after_polls(mut self, polls: u32) -> Self {
        self.abort_after_polls = Some(polls);
        self
    }

    /// Abort instead of acknowledging the `n`th prompt (1-based)
    pub fn aborting_at_prompt(mut self, n: usize) -> Self {
        self.abort_at_prompt = Some(n);
        self
    }
}

impl Console for MockTerminal<'_> {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        record(self.log, Event::Line);
        let mut s = String::new();
        s.push_str(line).map_err(|_| ConsoleError::Write)?;
        let _ = self.lines.push(s);
        Ok(())
    }
}

impl Operator for MockTerminal<'_> {
    fn await_acknowledgment(&mut self, prompt: &str) -> Result<(), OperatorError> {
        record(self.log, Event::Prompt);
        let mut s = String::new();
        s.push_str(prompt).expect("prompt too long for mock");
        let _ = self.prompts.push(s);
        if self.abort_at_prompt == Some(self.prompts.len()) {
            return Err(OperatorError::Aborted);
        }
        Ok(())
    }

    fn abort_requested(&mut self) -> Result<bool, ConsoleError> {
        self.polls += 1;
        Ok(self.abort_after_polls.is_some_and(|n| self.polls > n))
    }
}

pub struct SimClock<'a> {
    log: &'a Log,
    pub elapsed_ms: u64,
}

impl<'a> SimClock<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log, elapsed_ms: 0 }
    }
}

impl DelayNs for SimClock<'_> {
    fn delay_ns(&mut self, _ns: u32) {
        unreachable!("application delays are whole milliseconds");
    }

    fn delay_ms(&mut self, ms: u32) {
        record(self.log, Event::Delay(ms));
        self.elapsed_ms += ms as u64;
    }
}
