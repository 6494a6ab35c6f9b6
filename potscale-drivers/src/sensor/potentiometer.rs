//! Potentiometer on an ADC input
//!
//! A potentiometer wired as a voltage divider between the reference and
//! ground. The wiper voltage is converted and widened to the 16-bit
//! sample domain.

use potscale_core::traits::{PotSensor, SensorError};
use potscale_hal::{widen_to_u16, AdcReader};

/// Potentiometer wiper on one ADC channel
pub struct Potentiometer<ADC> {
    adc: ADC,
}

impl<ADC: AdcReader> Potentiometer<ADC> {
    pub fn new(adc: ADC) -> Self {
        Self { adc }
    }

    /// Give back the ADC channel
    pub fn release(self) -> ADC {
        self.adc
    }
}

impl<ADC: AdcReader> PotSensor for Potentiometer<ADC> {
    fn read_u16(&mut self) -> Result<u16, SensorError> {
        let raw = self.adc.read()?;
        Ok(widen_to_u16(raw, ADC::BITS))
    }
}

#[cfg(test)]
pub struct DummyAdc(pub Result<u16, potscale_hal::AdcError>);

#[cfg(test)]
impl AdcReader for DummyAdc {
    const BITS: u8 = 12;

    fn read(&mut self) -> Result<u16, potscale_hal::AdcError> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use potscale_hal::AdcError;

    fn read(raw: u16) -> u16 {
        Potentiometer::new(DummyAdc(Ok(raw))).read_u16().unwrap()
    }

    #[test]
    fn test_full_travel() {
        assert_eq!(read(0), 0);
        assert_eq!(read(4095), 65535);
    }

    #[test]
    fn test_midpoint() {
        // 0x800 -> 0x8008
        assert_eq!(read(2048), 32776);
    }

    #[test]
    fn test_near_minimum() {
        // 528 is a typical calibrated minimum
        assert_eq!(read(33), 528);
    }

    #[test]
    fn test_adc_errors_map() {
        let mut pot = Potentiometer::new(DummyAdc(Err(AdcError::Timeout)));
        assert_eq!(pot.read_u16(), Err(SensorError::Timeout));

        let mut pot = Potentiometer::new(DummyAdc(Err(AdcError::Conversion)));
        assert_eq!(pot.read_u16(), Err(SensorError::ConversionError));
    }

    #[test]
    fn test_borrowed_adc() {
        let mut adc = DummyAdc(Ok(1));
        let mut pot = Potentiometer::new(&mut adc);
        assert_eq!(pot.read_u16(), Ok(16));
    }
}
