pub mod formatter;
pub mod info;
pub mod kind;
pub mod range;

pub type ParameterId = u32;
pub type ParameterValue = f64;
