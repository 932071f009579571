use super::{kind::HapticParameter, range::ClosedRange, ParameterId};

#[derive(Clone, Debug)]
pub struct ParameterInfo {
    parameter: HapticParameter,
    range: ClosedRange,
    step: f64,
    unit: &'static str,
}

impl ParameterInfo {
    pub fn new(parameter: HapticParameter, range: ClosedRange) -> Self {
        Self {
            parameter,
            range,
            step: 0.0,
            unit: "",
        }
    }

    /// Slider increment, zero for continuous parameters
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = unit;
        self
    }

    pub fn parameter(&self) -> HapticParameter {
        self.parameter
    }

    pub fn id(&self) -> ParameterId {
        self.parameter.id()
    }

    pub fn name(&self) -> &'static str {
        self.parameter.name()
    }

    pub fn range(&self) -> &ClosedRange {
        &self.range
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of discrete slider positions minus one, zero if continuous
    pub fn steps(&self) -> usize {
        if self.step <= 0.0 {
            return 0;
        }

        (self.range.width() / self.step).round() as usize
    }

    pub fn unit(&self) -> &'static str {
        self.unit
    }
}
