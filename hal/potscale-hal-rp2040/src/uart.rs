//! Console UART bring-up
//!
//! RP2040 has two UART peripherals (UART0 and UART1). TX/RX pins:
//! - UART0: TX on GPIO0, 12, 16, 28; RX on GPIO1, 13, 17, 29
//! - UART1: TX on GPIO4, 8, 20, 24; RX on GPIO5, 9, 21, 25

use embassy_rp::uart::{self, Blocking, RxPin, TxPin, Uart};
use embassy_rp::Peri;

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

impl UartId {
    /// UART instance that can drive TX on `gpio`
    pub const fn for_tx_pin(gpio: u8) -> Option<Self> {
        match gpio {
            0 | 12 | 16 | 28 => Some(UartId::Uart0),
            4 | 8 | 20 | 24 => Some(UartId::Uart1),
            _ => None,
        }
    }

    /// UART instance that can drive RX on `gpio`
    pub const fn for_rx_pin(gpio: u8) -> Option<Self> {
        match gpio {
            1 | 13 | 17 | 29 => Some(UartId::Uart0),
            5 | 9 | 21 | 25 => Some(UartId::Uart1),
            _ => None,
        }
    }
}

/// Open a blocking 8N1 UART at `baudrate`
pub fn open_console<'d, T: uart::Instance>(
    peri: Peri<'d, T>,
    tx: Peri<'d, impl TxPin<T>>,
    rx: Peri<'d, impl RxPin<T>>,
    baudrate: u32,
) -> Uart<'d, Blocking> {
    let mut config = uart::Config::default();
    config.baudrate = baudrate;

    Uart::new_blocking(peri, tx, rx, config)
}
