use crate::{
    conversion::{LevelTransform, DEFAULT_SAFE_FLOOR_DB, DEFAULT_SAFE_THRESHOLD},
    error::Error,
    parameters::{kind::HapticParameter, range::{ClosedRange, ParameterRange}},
};

/// Ranges and constants for a [`crate::ParameterModel`].
///
/// Two presets cover the hardware variants: [`ModelConfig::linear_gain`]
/// stores intensity as a linear gain and spectrum as a linear balance,
/// [`ModelConfig::decibel`] stores both already in dB.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    intensity_range: ClosedRange,
    spectrum_range: ClosedRange,
    movement_range: ClosedRange,
    vibration_range: ClosedRange,
    safe_threshold: f64,
    safe_floor_db: f64,
    linear_amplitude: bool,
    default_intensity: f64,
    default_spectrum: f64,
}

impl ModelConfig {
    pub fn linear_gain() -> Self {
        Self {
            intensity_range: ClosedRange::new(0.0, 1.0),
            spectrum_range: ClosedRange::new(-1.0, 1.0),
            movement_range: ClosedRange::new(-20.0, 0.0),
            vibration_range: ClosedRange::new(-20.0, 0.0),
            safe_threshold: DEFAULT_SAFE_THRESHOLD,
            safe_floor_db: DEFAULT_SAFE_FLOOR_DB,
            linear_amplitude: true,
            default_intensity: 1.0,
            default_spectrum: 0.0,
        }
    }

    pub fn decibel() -> Self {
        Self {
            intensity_range: ClosedRange::new(-30.0, 0.0),
            spectrum_range: ClosedRange::new(-20.0, 20.0),
            linear_amplitude: false,
            default_intensity: 0.0,
            default_spectrum: 0.0,
            ..Self::linear_gain()
        }
    }

    pub fn with_intensity_range(mut self, range: ClosedRange) -> Self {
        self.intensity_range = range;
        self
    }

    pub fn with_spectrum_range(mut self, range: ClosedRange) -> Self {
        self.spectrum_range = range;
        self
    }

    pub fn with_movement_range(mut self, range: ClosedRange) -> Self {
        self.movement_range = range;
        self
    }

    pub fn with_vibration_range(mut self, range: ClosedRange) -> Self {
        self.vibration_range = range;
        self
    }

    /// Gains below `threshold` read as `floor_db` instead of going through the logarithm.
    /// Only the linear variant takes a logarithm, the dB variant ignores both.
    pub fn with_safe_floor(mut self, threshold: f64, floor_db: f64) -> Self {
        self.safe_threshold = threshold;
        self.safe_floor_db = floor_db;
        self
    }

    pub fn with_linear_amplitude(mut self, linear_amplitude: bool) -> Self {
        self.linear_amplitude = linear_amplitude;
        self
    }

    pub fn with_defaults(mut self, intensity: f64, spectrum: f64) -> Self {
        self.default_intensity = intensity;
        self.default_spectrum = spectrum;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        for parameter in HapticParameter::ALL {
            self.range(parameter).validate(parameter.name())?;
        }

        if !self.safe_threshold.is_finite() || self.safe_threshold <= 0.0 {
            return Err(Error::InvalidThreshold(self.safe_threshold));
        }

        if !self.safe_floor_db.is_finite() {
            return Err(Error::InvalidFloor(self.safe_floor_db));
        }

        let defaults = [
            (HapticParameter::Intensity, self.default_intensity),
            (HapticParameter::Spectrum, self.default_spectrum),
        ];

        for (parameter, value) in defaults {
            if !self.range(parameter).contains(value) {
                return Err(Error::InvalidDefault {
                    parameter: parameter.name(),
                    value,
                });
            }
        }

        Ok(())
    }

    pub fn range(&self, parameter: HapticParameter) -> &ClosedRange {
        match parameter {
            HapticParameter::Intensity => &self.intensity_range,
            HapticParameter::Spectrum => &self.spectrum_range,
            HapticParameter::Movement => &self.movement_range,
            HapticParameter::Vibration => &self.vibration_range,
        }
    }

    pub fn linear_amplitude(&self) -> bool {
        self.linear_amplitude
    }

    pub fn safe_threshold(&self) -> f64 {
        self.safe_threshold
    }

    pub fn safe_floor_db(&self) -> f64 {
        self.safe_floor_db
    }

    pub fn default_intensity(&self) -> f64 {
        self.default_intensity
    }

    pub fn default_spectrum(&self) -> f64 {
        self.default_spectrum
    }

    pub fn transform(&self) -> LevelTransform {
        if self.linear_amplitude {
            LevelTransform::linear(self.safe_threshold, self.safe_floor_db)
        } else {
            LevelTransform::decibel()
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::linear_gain()
    }
}
