use crate::parameters::{ParameterId, ParameterValue};

/// A single user interaction, applied as exactly one setter call.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Event {
    /// Plain value in the parameter's own units
    ParameterValue {
        id: ParameterId,
        value: ParameterValue,
    },

    /// Slider position in `[0, 1]`
    ParameterNormalized {
        id: ParameterId,
        normalized: ParameterValue,
    },
}
