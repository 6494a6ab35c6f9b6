//! Pixel display trait

use potscale_hal::I2cBusError;

/// Monochrome pixel value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelColor {
    /// Pixel off (black)
    Off = 0,
    /// Pixel lit (white)
    On = 1,
}

/// Errors that can occur with the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Initialization sequence was rejected
    Init(I2cBusError),
    /// Frame transfer failed
    Write(I2cBusError),
}

/// Trait for a pixel-addressable text sink
///
/// Drawing and clearing only touch the frame buffer; nothing reaches the
/// panel until [`TextDisplay::present`] is called.
pub trait TextDisplay {
    /// Draw text with its top-left corner at pixel (`x`, `y`)
    ///
    /// Text running past the right or bottom edge is clipped.
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: PixelColor,
    ) -> Result<(), DisplayError>;

    /// Push the frame buffer to the panel
    fn present(&mut self) -> Result<(), DisplayError>;

    /// Fill the whole frame buffer with `color`
    fn clear(&mut self, color: PixelColor) -> Result<(), DisplayError>;
}

impl<T: TextDisplay + ?Sized> TextDisplay for &mut T {
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: PixelColor,
    ) -> Result<(), DisplayError> {
        T::draw_text(self, text, x, y, color)
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        T::present(self)
    }

    fn clear(&mut self, color: PixelColor) -> Result<(), DisplayError> {
        T::clear(self, color)
    }
}
