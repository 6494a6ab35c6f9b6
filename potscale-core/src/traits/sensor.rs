//! Potentiometer sensor trait

use potscale_hal::AdcError;

/// Errors that can occur while sampling the potentiometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion error
    ConversionError,
    /// Conversion did not complete
    Timeout,
}

impl From<AdcError> for SensorError {
    fn from(e: AdcError) -> Self {
        match e {
            AdcError::Conversion => SensorError::ConversionError,
            AdcError::Timeout => SensorError::Timeout,
        }
    }
}

/// Trait for the analog potentiometer input
pub trait PotSensor {
    /// Read one raw sample in `[0, 65536)`
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_u16(&mut self) -> Result<u16, SensorError>;
}

impl<T: PotSensor + ?Sized> PotSensor for &mut T {
    fn read_u16(&mut self) -> Result<u16, SensorError> {
        T::read_u16(self)
    }
}
