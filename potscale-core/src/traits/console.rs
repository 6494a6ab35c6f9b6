//! Console and operator traits
//!
//! The console is a line-oriented text sink. The operator sits behind the
//! same console and answers prompts; an operator can also raise an abort
//! at any time, which the application polls for.

/// Errors from the console link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleError {
    /// Transmit failed
    Write,
    /// Receive failed (framing, parity, overrun)
    Read,
}

/// Outcome of waiting on the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatorError {
    /// Operator asked to stop instead of acknowledging
    Aborted,
    /// The console failed while waiting
    Console(ConsoleError),
}

impl From<ConsoleError> for OperatorError {
    fn from(e: ConsoleError) -> Self {
        OperatorError::Console(e)
    }
}

/// Line-oriented text output
pub trait Console {
    /// Write one line; the implementation appends the line terminator
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}

/// Operator interaction over a console
pub trait Operator: Console {
    /// Show `prompt` and block until the operator acknowledges it
    ///
    /// There is no timeout. Returns `Err(OperatorError::Aborted)` if the
    /// operator aborts instead.
    fn await_acknowledgment(&mut self, prompt: &str) -> Result<(), OperatorError>;

    /// Check, without blocking, whether the operator has asked to stop
    fn abort_requested(&mut self) -> Result<bool, ConsoleError>;
}

impl<T: Console + ?Sized> Console for &mut T {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        T::write_line(self, line)
    }
}

impl<T: Operator + ?Sized> Operator for &mut T {
    fn await_acknowledgment(&mut self, prompt: &str) -> Result<(), OperatorError> {
        T::await_acknowledgment(self, prompt)
    }

    fn abort_requested(&mut self) -> Result<bool, ConsoleError> {
        T::abort_requested(self)
    }
}
