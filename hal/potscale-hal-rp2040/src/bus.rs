//! Display bus bring-up
//!
//! RP2040 I2C pin options (SDA/SCL pairs, both in one instance):
//! - I2C0: GPIO0/1, 4/5, 8/9, 12/13, 16/17, 20/21, 24/25, 28/29
//! - I2C1: GPIO2/3, 6/7, 10/11, 14/15, 18/19, 22/23, 26/27

use embassy_rp::i2c::{self, Blocking, I2c, SclPin, SdaPin};
use embassy_rp::Peri;
use potscale_hal::{I2cBusError, I2cConfig};

/// SSD1306 no-operation command, prefixed by the command control byte
const PROBE_PAYLOAD: [u8; 2] = [0x00, 0xE3];

/// Open a blocking I2C bus and check the display answers at `address`
pub fn open_display_bus<'d, T: i2c::Instance>(
    peri: Peri<'d, T>,
    scl: Peri<'d, impl SclPin<T>>,
    sda: Peri<'d, impl SdaPin<T>>,
    config: I2cConfig,
    address: u8,
) -> Result<I2c<'d, T, Blocking>, I2cBusError> {
    let mut bus_config = i2c::Config::default();
    bus_config.frequency = config.frequency;

    let mut bus = I2c::new_blocking(peri, scl, sda, bus_config);
    potscale_hal::probe(&mut bus, address, &PROBE_PAYLOAD)?;

    Ok(bus)
}

/// Whether `scl` and `sda` form a pin pair of the same I2C instance
pub const fn is_valid_pair(scl: u8, sda: u8) -> bool {
    scl < 30 && sda < 30 && scl % 2 == 1 && sda + 1 == scl
}
