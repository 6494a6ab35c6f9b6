//! Compile-time configuration
//!
//! There is no configuration file and no persisted state. Every tunable
//! lives here as a constant and is baked into the firmware image.

/// Calibration pass settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationConfig {
    /// Number of readings averaged into the minimum pot value
    pub sample_count: u32,
    /// Pause between consecutive readings (ms)
    pub sample_delay_ms: u32,
}

impl CalibrationConfig {
    pub const DEFAULT: Self = Self {
        sample_count: 500,
        sample_delay_ms: 5,
    };
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Acquisition loop settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AcquisitionConfig {
    /// Cadence delay (ms). Each iteration waits this long twice.
    pub cadence_ms: u32,
}

impl AcquisitionConfig {
    pub const DEFAULT: Self = Self { cadence_ms: 300 };
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The two ends of the linear mapping
///
/// The low end's raw coordinate comes from calibration; everything else
/// is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleConfig {
    /// Largest raw value the sensor domain can express (exclusive bound)
    pub max_pot_value: f64,
    /// Scaled value at the calibrated minimum
    pub scaled_at_min: f64,
    /// Scaled value at `max_pot_value`
    pub scaled_at_max: f64,
}

impl ScaleConfig {
    pub const DEFAULT: Self = Self {
        max_pot_value: 65536.0,
        scaled_at_min: 100.0,
        scaled_at_max: 0.0,
    };
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fixed four-line text layout on the pixel display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayLayout {
    /// Pixel row of each line, top to bottom
    pub rows_px: [i32; 4],
    /// Pixel column shared by all lines
    pub column_px: i32,
    /// Label above the scaled value
    pub scaled_label: &'static str,
    /// Label above the raw value
    pub raw_label: &'static str,
}

impl DisplayLayout {
    pub const DEFAULT: Self = Self {
        rows_px: [0, 14, 28, 42],
        column_px: 0,
        scaled_label: "Scaled (100-0):",
        raw_label: "Raw (0-65536):",
    };
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything the run needs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunConfig {
    pub calibration: CalibrationConfig,
    pub acquisition: AcquisitionConfig,
    pub scale: ScaleConfig,
    pub layout: DisplayLayout,
}

impl RunConfig {
    pub const DEFAULT: Self = Self {
        calibration: CalibrationConfig::DEFAULT,
        acquisition: AcquisitionConfig::DEFAULT,
        scale: ScaleConfig::DEFAULT,
        layout: DisplayLayout::DEFAULT,
    };
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
