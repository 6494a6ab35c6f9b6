//! Linear scaling between two calibration points
//!
//! A raw sample `x` maps to `y = m * (x - x1) + y1` where
//! `m = (y2 - y1) / (x2 - x1)`. Output is not clamped: a raw value below
//! the calibrated minimum scales above `y1`.

use crate::config::ScaleConfig;

/// One end of the linear mapping
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationPoint {
    /// Raw-domain coordinate
    pub x: f64,
    /// Scaled value wanted at `x`
    pub y: f64,
}

impl CalibrationPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Errors building a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScalingError {
    /// Both points share one raw coordinate; the slope is undefined
    DegenerateCalibration,
    /// A coordinate is NaN or infinite
    NonFinite,
}

/// Slope of the line through `p1` and `p2`
pub fn slope(p1: CalibrationPoint, p2: CalibrationPoint) -> Result<f64, ScalingError> {
    if !p1.is_finite() || !p2.is_finite() {
        return Err(ScalingError::NonFinite);
    }
    if p1.x == p2.x {
        return Err(ScalingError::DegenerateCalibration);
    }

    Ok((p2.y - p1.y) / (p2.x - p1.x))
}

/// Map `raw` onto the line through `low` with the given slope
pub fn scale(raw: u32, low: &CalibrationPoint, slope: f64) -> f64 {
    slope * (raw as f64 - low.x) + low.y
}

/// Immutable mapping built once after calibration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScalingTransform {
    low: CalibrationPoint,
    high: CalibrationPoint,
    slope: f64,
}

impl ScalingTransform {
    /// Build the transform through two points
    pub fn new(low: CalibrationPoint, high: CalibrationPoint) -> Result<Self, ScalingError> {
        let slope = slope(low, high)?;
        Ok(Self { low, high, slope })
    }

    /// Build the transform from a calibrated minimum and the fixed ends
    pub fn from_min_pot_value(
        min_pot_value: f64,
        config: &ScaleConfig,
    ) -> Result<Self, ScalingError> {
        Self::new(
            CalibrationPoint::new(min_pot_value, config.scaled_at_min),
            CalibrationPoint::new(config.max_pot_value, config.scaled_at_max),
        )
    }

    /// Scale one raw sample
    pub fn apply(&self, raw: u32) -> f64 {
        scale(raw, &self.low, self.slope)
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn low(&self) -> CalibrationPoint {
        self.low
    }

    pub fn high(&self) -> CalibrationPoint {
        self.high
    }
}
