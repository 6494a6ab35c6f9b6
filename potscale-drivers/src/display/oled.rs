//! SSD1306 OLED text display
//!
//! A 128x64 panel on blocking I2C, driven by the `ssd1306` crate in
//! buffered graphics mode. Text is drawn into the frame buffer with
//! `embedded-graphics` and reaches the panel on [`TextDisplay::present`].

use embedded_graphics::mono_font::iso_8859_1::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, Point};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;
use embedded_hal::i2c::I2c;
use potscale_core::traits::{DisplayError, PixelColor, TextDisplay};
use potscale_hal::I2cBusError;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::{DisplayConfig, DisplayRotation, DisplaySize128x64, I2CInterface};
use ssd1306::{I2CDisplayInterface, Ssd1306};

/// Factory I2C address (0x3D with the address pin pulled high)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

type Panel<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// SSD1306 panel behind the [`TextDisplay`] trait
pub struct Oled<I2C> {
    panel: Panel<I2C>,
}

impl<I2C> Oled<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self { panel }
    }

    /// Send the power-up sequence and turn the panel on
    ///
    /// The display interface does not keep the bus error kind, so a
    /// rejected command reports [`I2cBusError::Other`]. An absent panel is
    /// caught earlier by the bus probe.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.panel
            .init()
            .map_err(|_| DisplayError::Init(I2cBusError::Other))
    }

    /// Turn the panel on or off without touching the frame buffer
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        self.panel
            .set_display_on(on)
            .map_err(|_| DisplayError::Write(I2cBusError::Other))
    }
}

fn binary(color: PixelColor) -> BinaryColor {
    match color {
        PixelColor::Off => BinaryColor::Off,
        PixelColor::On => BinaryColor::On,
    }
}

impl<I2C> TextDisplay for Oled<I2C>
where
    I2C: I2c,
{
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: PixelColor,
    ) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_6X10, binary(color));
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.panel)
            .map_err(|_| DisplayError::Write(I2cBusError::Other))?;
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.panel
            .flush()
            .map_err(|_| DisplayError::Write(I2cBusError::Other))
    }

    fn clear(&mut self, color: PixelColor) -> Result<(), DisplayError> {
        match color {
            PixelColor::Off => self.panel.clear_buffer(),
            PixelColor::On => DrawTarget::clear(&mut self.panel, BinaryColor::On)
                .map_err(|_| DisplayError::Write(I2cBusError::Other))?,
        }
        Ok(())
    }
}
