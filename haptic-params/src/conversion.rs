//! Unit conversions between hardware values and perceptual levels.
//!
//! Hardware values are an amplitude (intensity) and a balance (spectrum).
//! Perceptual levels are expressed as an upper level plus a signed difference
//! between the two channels, both in dB.

pub const DEFAULT_SAFE_THRESHOLD: f64 = 0.001;
pub const DEFAULT_SAFE_FLOOR_DB: f64 = -60.0;

// dB per unit of linear balance
const DIFFERENCE_SCALE: f64 = 20.0;

/// Closed-interval saturation. NaN passes through unchanged.
pub fn clip(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// `20 * log10(gain)`, or `floor_db` for gains below `threshold`.
pub fn safe_gain_to_db(gain: f64, threshold: f64, floor_db: f64) -> f64 {
    if gain < threshold {
        return floor_db;
    }

    20.0 * gain.log10()
}

pub fn db_to_gain(db: f64) -> f64 {
    f64::powf(10.0, db / 20.0)
}

/// Rounds to the nearest whole dB, ties to even.
pub fn round_db(db: f64) -> f64 {
    db.round_ties_even()
}

/// Splits an upper level and a signed difference into `(movement, vibration)`.
///
/// A negative difference means vibration is the quieter channel, otherwise
/// movement is.
pub fn levels_from_upper_and_difference(upper_db: f64, difference_db: f64) -> (f64, f64) {
    if difference_db < 0.0 {
        (upper_db, upper_db + difference_db)
    } else {
        (upper_db - difference_db, upper_db)
    }
}

/// Inverse of [`levels_from_upper_and_difference`].
pub fn upper_and_difference_from_levels(movement_db: f64, vibration_db: f64) -> (f64, f64) {
    (f64::max(movement_db, vibration_db), vibration_db - movement_db)
}

/// Forward and inverse transforms for one amplitude domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelTransform {
    linear_amplitude: bool,
    safe_threshold: f64,
    safe_floor_db: f64,
}

impl LevelTransform {
    /// Intensity is a linear gain and spectrum a linear balance.
    pub const fn linear(safe_threshold: f64, safe_floor_db: f64) -> Self {
        Self {
            linear_amplitude: true,
            safe_threshold,
            safe_floor_db,
        }
    }

    /// Intensity and spectrum are already stored in dB.
    pub const fn decibel() -> Self {
        Self {
            linear_amplitude: false,
            safe_threshold: DEFAULT_SAFE_THRESHOLD,
            safe_floor_db: DEFAULT_SAFE_FLOOR_DB,
        }
    }

    pub fn is_linear(&self) -> bool {
        self.linear_amplitude
    }

    pub fn amplitude_db(&self, intensity: f64) -> f64 {
        if self.linear_amplitude {
            safe_gain_to_db(intensity, self.safe_threshold, self.safe_floor_db)
        } else {
            intensity
        }
    }

    pub fn difference_db(&self, spectrum: f64) -> f64 {
        if self.linear_amplitude {
            DIFFERENCE_SCALE * spectrum
        } else {
            spectrum
        }
    }

    pub fn inverse_amplitude(&self, db: f64) -> f64 {
        if self.linear_amplitude {
            db_to_gain(db)
        } else {
            db
        }
    }

    pub fn inverse_difference(&self, difference_db: f64) -> f64 {
        if self.linear_amplitude {
            difference_db / DIFFERENCE_SCALE
        } else {
            difference_db
        }
    }
}

impl Default for LevelTransform {
    fn default() -> Self {
        Self::linear(DEFAULT_SAFE_THRESHOLD, DEFAULT_SAFE_FLOOR_DB)
    }
}
