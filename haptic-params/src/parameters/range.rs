use crate::{conversion::clip, error::Error, parameters::ParameterValue};

pub trait ParameterRange<T>: Send + Sync {
    fn clamp(&self, value: T) -> T;
    fn min(&self) -> T;
    fn max(&self) -> T;
    fn plain_to_normalized(&self, plain: T) -> Option<ParameterValue>;
    fn normalized_to_plain(&self, normalized: ParameterValue) -> T;

    fn contains(&self, value: T) -> bool
    where
        T: PartialOrd,
    {
        value >= self.min() && value <= self.max()
    }
}

/// Closed interval `[min, max]` with linear slider mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosedRange {
    min: f64,
    max: f64,
}

impl ClosedRange {
    /// Unvalidated; [`crate::ModelConfig::validate`] rejects inverted or infinite bounds
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
        }
    }

    pub fn try_new(parameter: &'static str, min: f64, max: f64) -> Result<Self, Error> {
        let range = Self { min, max };
        range.validate(parameter)?;
        Ok(range)
    }

    pub(crate) fn validate(&self, parameter: &'static str) -> Result<(), Error> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(Error::InvalidRange {
                parameter,
                min: self.min,
                max: self.max,
            });
        }

        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

impl ParameterRange<f64> for ClosedRange {
    fn clamp(&self, value: f64) -> f64 {
        clip(value, self.min, self.max)
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn plain_to_normalized(&self, plain: f64) -> Option<ParameterValue> {
        if plain < self.min || plain > self.max {
            return None;
        }

        // A degenerate range has a single position
        if self.width() == 0.0 {
            return Some(0.0);
        }

        Some((plain - self.min) / self.width())
    }

    fn normalized_to_plain(&self, normalized: ParameterValue) -> f64 {
        let normalized = normalized.clamp(0.0, 1.0);
        normalized * self.width() + self.min
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_ulps_eq;

    use crate::error::Error;

    use super::{ClosedRange, ParameterRange};

    #[test]
    fn closed_range_mapping() {
        let range = ClosedRange::new(-20.0, 0.0);
        assert_eq!(range.plain_to_normalized(-20.0), Some(0.0));
        assert_eq!(range.plain_to_normalized(0.0), Some(1.0));
        assert!(range.plain_to_normalized(-21.0).is_none());
        assert!(range.plain_to_normalized(0.5).is_none());
        assert_eq!(range.normalized_to_plain(0.0), -20.0);
        assert_eq!(range.normalized_to_plain(1.0), 0.0);
        assert_ulps_eq!(range.plain_to_normalized(range.normalized_to_plain(0.25)).unwrap(), 0.25);
    }

    #[test]
    fn normalized_is_saturated() {
        let range = ClosedRange::new(-1.0, 1.0);
        assert_eq!(range.normalized_to_plain(-0.5), -1.0);
        assert_eq!(range.normalized_to_plain(3.0), 1.0);
    }

    #[test]
    fn clamp_saturates_to_bounds() {
        let range = ClosedRange::new(0.0, 1.0);
        assert_eq!(range.clamp(-3.0), 0.0);
        assert_eq!(range.clamp(1.5), 1.0);
        assert_eq!(range.clamp(0.25), 0.25);
        assert!(range.contains(1.0));
        assert!(!range.contains(1.01));
    }

    #[test]
    fn degenerate_range() {
        let range = ClosedRange::new(-6.0, -6.0);
        assert_eq!(range.plain_to_normalized(-6.0), Some(0.0));
        assert_eq!(range.normalized_to_plain(0.7), -6.0);
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        assert_eq!(
            ClosedRange::try_new("Spectrum", 1.0, -1.0),
            Err(Error::InvalidRange { parameter: "Spectrum", min: 1.0, max: -1.0 }),
        );
        assert!(ClosedRange::try_new("Intensity", f64::NEG_INFINITY, 0.0).is_err());
        assert!(ClosedRange::try_new("Intensity", 0.0, f64::NAN).is_err());
        assert!(ClosedRange::try_new("Intensity", 0.0, 1.0).is_ok());
    }
}
