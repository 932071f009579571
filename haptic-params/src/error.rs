use thiserror::Error;

use crate::parameters::ParameterId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid range for {parameter}: [{min}, {max}]")]
    InvalidRange {
        parameter: &'static str,
        min: f64,
        max: f64,
    },

    #[error("default value {value} for {parameter} is outside its range")]
    InvalidDefault {
        parameter: &'static str,
        value: f64,
    },

    #[error("safe threshold must be finite and positive, got {0}")]
    InvalidThreshold(f64),

    #[error("safe floor must be finite, got {0} dB")]
    InvalidFloor(f64),

    #[error("no parameter with id {0}")]
    UnknownParameter(ParameterId),

    #[error("can't parse \"{0}\" as a parameter value")]
    Parse(String),
}
