//! Serial console and operator
//!
//! A line-oriented console on a UART. The operator answers prompts with
//! `<ENTER>` and can press Ctrl-C at any time to stop the run.
//!
//! Input is only consumed while a prompt is waiting or when the
//! application polls for an abort. Everything other than CR, LF and ETX
//! is discarded.

use embedded_hal_nb::serial::{Error, ErrorKind, Read, Write};
use potscale_core::traits::{Console, ConsoleError, Operator, OperatorError};

/// End of text, sent by Ctrl-C
pub const ETX: u8 = 0x03;
const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// What one received byte means to the operator protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Enter,
    Abort,
    Ignored,
}

/// Console and operator on one serial port
pub struct SerialConsole<U> {
    uart: U,
    /// An abort was seen; it stays raised
    aborted: bool,
    /// The last line ending was CR, so a following LF belongs to it
    after_cr: bool,
}

impl<U> SerialConsole<U>
where
    U: Read<u8> + Write<u8>,
{
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            aborted: false,
            after_cr: false,
        }
    }

    /// Give back the port
    pub fn release(self) -> U {
        self.uart
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ConsoleError> {
        for &b in bytes {
            nb::block!(self.uart.write(b)).map_err(|_| ConsoleError::Write)?;
        }
        Ok(())
    }

    fn classify(&mut self, byte: u8) -> Input {
        let after_cr = core::mem::replace(&mut self.after_cr, byte == CR);
        match byte {
            ETX => {
                self.aborted = true;
                Input::Abort
            }
            CR => Input::Enter,
            LF if after_cr => Input::Ignored,
            LF => Input::Enter,
            _ => Input::Ignored,
        }
    }

    /// Receive one byte, or `None` if the port has nothing or lost data
    fn receive(&mut self, blocking: bool) -> Result<Option<u8>, ConsoleError> {
        loop {
            match self.uart.read() {
                Ok(b) => return Ok(Some(b)),
                Err(nb::Error::WouldBlock) if blocking => continue,
                Err(nb::Error::WouldBlock) => return Ok(None),
                // Dropped input is not a link failure
                Err(nb::Error::Other(e)) if e.kind() == ErrorKind::Overrun => {
                    if !blocking {
                        return Ok(None);
                    }
                }
                Err(nb::Error::Other(_)) => return Err(ConsoleError::Read),
            }
        }
    }
}

impl<U> Console for SerialConsole<U>
where
    U: Read<u8> + Write<u8>,
{
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.write_bytes(line.as_bytes())?;
        self.write_bytes(b"\r\n")?;
        nb::block!(self.uart.flush()).map_err(|_| ConsoleError::Write)
    }
}

impl<U> Operator for SerialConsole<U>
where
    U: Read<u8> + Write<u8>,
{
    fn await_acknowledgment(&mut self, prompt: &str) -> Result<(), OperatorError> {
        self.write_line(prompt)?;

        loop {
            if self.aborted {
                return Err(OperatorError::Aborted);
            }
            if let Some(byte) = self.receive(true)? {
                if self.classify(byte) == Input::Enter {
                    return Ok(());
                }
            }
        }
    }

    fn abort_requested(&mut self) -> Result<bool, ConsoleError> {
        while !self.aborted {
            match self.receive(false)? {
                Some(byte) => {
                    self.classify(byte);
                }
                None => break,
            }
        }
        Ok(self.aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_nb::serial::ErrorType;
    use heapless::Vec;

    /// Scripted receive side, recorded transmit side
    struct MockUart {
        rx: Vec<Result<u8, ErrorKind>, 32>,
        next: usize,
        tx: Vec<u8, 256>,
        fail_tx: bool,
    }

    impl MockUart {
        fn new(input: &[u8]) -> Self {
            Self {
                rx: input.iter().map(|&b| Ok(b)).collect(),
                next: 0,
                tx: Vec::new(),
                fail_tx: false,
            }
        }

        fn with_rx(rx: &[Result<u8, ErrorKind>]) -> Self {
            let mut uart = Self::new(&[]);
            uart.rx.extend_from_slice(rx).unwrap();
            uart
        }

        fn pending(&self) -> usize {
            self.rx.len() - self.next
        }
    }

    impl ErrorType for MockUart {
        type Error = ErrorKind;
    }

    impl Read<u8> for MockUart {
        fn read(&mut self) -> nb::Result<u8, Self::Error> {
            let Some(&item) = self.rx.get(self.next) else {
                return Err(nb::Error::WouldBlock);
            };
            self.next += 1;
            item.map_err(nb::Error::Other)
        }
    }

    impl Write<u8> for MockUart {
        fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
            if self.fail_tx {
                return Err(nb::Error::Other(ErrorKind::Other));
            }
            self.tx.push(word).map_err(|_| nb::Error::WouldBlock)
        }

        fn flush(&mut self) -> nb::Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_write_line_appends_crlf() {
        let mut console = SerialConsole::new(MockUart::new(&[]));
        console.write_line("raw: 528, scaled: 100.00").unwrap();

        assert_eq!(
            console.release().tx.as_slice(),
            b"raw: 528, scaled: 100.00\r\n"
        );
    }

    #[test]
    fn test_write_failure() {
        let mut uart = MockUart::new(&[]);
        uart.fail_tx = true;
        let mut console = SerialConsole::new(uart);

        assert_eq!(console.write_line("x"), Err(ConsoleError::Write));
    }

    #[test]
    fn test_acknowledge_skips_typed_text() {
        let mut console = SerialConsole::new(MockUart::new(b"abc\r"));
        console.await_acknowledgment("Hit <ENTER> to continue").unwrap();

        let uart = console.release();
        assert_eq!(uart.tx.as_slice(), b"Hit <ENTER> to continue\r\n");
        assert_eq!(uart.pending(), 0);
    }

    #[test]
    fn test_crlf_acknowledges_once() {
        // CR LF, then a bare LF for the second prompt
        let mut console = SerialConsole::new(MockUart::new(b"\r\n\n"));
        console.await_acknowledgment("first").unwrap();
        console.await_acknowledgment("second").unwrap();

        assert_eq!(console.release().pending(), 0);
    }

    #[test]
    fn test_ctrl_c_at_prompt() {
        let mut console = SerialConsole::new(MockUart::new(&[b'x', ETX, b'\r']));

        assert_eq!(
            console.await_acknowledgment("prompt"),
            Err(OperatorError::Aborted)
        );
        // The abort is latched
        assert_eq!(console.abort_requested(), Ok(true));
    }

    #[test]
    fn test_abort_poll_never_blocks() {
        let mut console = SerialConsole::new(MockUart::new(b"12\r\n"));
        assert_eq!(console.abort_requested(), Ok(false));
        assert_eq!(console.abort_requested(), Ok(false));

        let mut console = SerialConsole::new(MockUart::new(&[b'q', ETX]));
        assert_eq!(console.abort_requested(), Ok(true));
    }

    #[test]
    fn test_overrun_is_not_fatal() {
        let mut console =
            SerialConsole::new(MockUart::with_rx(&[Err(ErrorKind::Overrun), Ok(b'\r')]));
        assert_eq!(console.abort_requested(), Ok(false));

        let mut console =
            SerialConsole::new(MockUart::with_rx(&[Err(ErrorKind::Overrun), Ok(b'\r')]));
        assert!(console.await_acknowledgment("prompt").is_ok());
    }

    #[test]
    fn test_receive_fault() {
        let mut console = SerialConsole::new(MockUart::with_rx(&[Err(ErrorKind::Parity)]));
        assert_eq!(console.abort_requested(), Err(ConsoleError::Read));

        let mut console = SerialConsole::new(MockUart::with_rx(&[Err(ErrorKind::FrameFormat)]));
        assert_eq!(
            console.await_acknowledgment("prompt"),
            Err(OperatorError::Console(ConsoleError::Read))
        );
    }
}
