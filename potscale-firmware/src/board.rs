//! Raspberry Pi Pico wiring
//!
//! ```text
//! GPIO26 (ADC0)  <- potentiometer wiper (ends on 3V3 and AGND)
//! GPIO0  (SDA)   <> SSD1306 SDA
//! GPIO1  (SCL)   -> SSD1306 SCL
//! GPIO16 (TX)    -> console RX
//! GPIO17 (RX)    <- console TX
//! ```
//!
//! `main` takes the matching `PIN_*` peripherals; the checks below keep
//! these numbers consistent with what the chip can route.

use potscale_drivers::display::oled;
use potscale_hal::I2cConfig;
use potscale_hal_rp2040::adc::AdcChannel;
use potscale_hal_rp2040::bus;
use potscale_hal_rp2040::uart::UartId;

pub const POT_GPIO: u8 = 26;

pub const DISPLAY_SDA_GPIO: u8 = 0;
pub const DISPLAY_SCL_GPIO: u8 = 1;
pub const DISPLAY_BUS: I2cConfig = I2cConfig::FAST;
pub const DISPLAY_ADDRESS: u8 = oled::DEFAULT_ADDRESS;

pub const CONSOLE_TX_GPIO: u8 = 16;
pub const CONSOLE_RX_GPIO: u8 = 17;
pub const CONSOLE_BAUD: u32 = 115_200;

const _: () = assert!(matches!(
    AdcChannel::from_gpio(POT_GPIO),
    Some(AdcChannel::Adc0)
));
const _: () = assert!(bus::is_valid_pair(DISPLAY_SCL_GPIO, DISPLAY_SDA_GPIO));
const _: () = assert!(matches!(
    UartId::for_tx_pin(CONSOLE_TX_GPIO),
    Some(UartId::Uart0)
));
const _: () = assert!(matches!(
    UartId::for_rx_pin(CONSOLE_RX_GPIO),
    Some(UartId::Uart0)
));
