//! Analog-to-digital conversion
//!
//! Converters differ in resolution. The rest of the firmware works in a
//! 16-bit sample domain `[0, 65536)`, so readings are widened here.

/// Errors from a one-shot conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// The converter reported a failed conversion
    Conversion,
    /// The converter did not finish in time
    Timeout,
}

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Converter resolution in bits (12 on the RP2040)
    const BITS: u8;

    /// Read one raw conversion, right-aligned
    fn read(&mut self) -> Result<u16, AdcError>;
}

impl<T: AdcReader> AdcReader for &mut T {
    const BITS: u8 = T::BITS;

    fn read(&mut self) -> Result<u16, AdcError> {
        T::read(self)
    }
}

/// Widen a right-aligned `bits`-wide conversion to 16 bits
///
/// The value is shifted to the top and the low bits are filled by
/// repeating the pattern, so zero stays zero and full scale becomes
/// `0xFFFF`. A 12-bit reading `v` becomes `(v << 4) | (v >> 8)`.
pub fn widen_to_u16(raw: u16, bits: u8) -> u16 {
    if bits == 0 {
        return 0;
    }
    if bits >= 16 {
        return raw;
    }

    let mask = (1u32 << bits) - 1;
    let value = raw as u32 & mask;

    let mut out = 0u32;
    let mut filled = 0u32;
    while filled < 16 {
        let shift = 16i32 - bits as i32 - filled as i32;
        if shift >= 0 {
            out |= value << shift;
        } else {
            out |= value >> (-shift);
        }
        filled += bits as u32;
    }

    out as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_12_bit() {
        assert_eq!(widen_to_u16(0, 12), 0);
        assert_eq!(widen_to_u16(4095, 12), 0xFFFF);
        assert_eq!(widen_to_u16(0x800, 12), 0x8008);
        assert_eq!(widen_to_u16(0x123, 12), (0x123 << 4) | (0x123 >> 8));
    }

    #[test]
    fn test_widen_ignores_bits_above_resolution() {
        assert_eq!(widen_to_u16(0xF000 | 0x001, 12), widen_to_u16(0x001, 12));
    }

    #[test]
    fn test_widen_passthrough() {
        assert_eq!(widen_to_u16(0xBEEF, 16), 0xBEEF);
        assert_eq!(widen_to_u16(0xAB, 8), 0xABAB);
    }
}
