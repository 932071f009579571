pub use change_log::{ChangeLog, ChangeLogger, DEFAULT_LOG_CAPACITY};
pub use config::ModelConfig;
pub use error::Error;
pub use event::Event;
pub use model::ParameterModel;
pub use parameters::{ParameterId, ParameterValue};
pub use parameters::formatter::{format_lenient, DecibelFormatter, FloatFormatter, ParameterFormatter};
pub use parameters::info::ParameterInfo;
pub use parameters::kind::HapticParameter;
pub use parameters::range::{ClosedRange, ParameterRange};
pub use shared::SharedParameterModel;

mod change_log;
mod config;
pub mod conversion;
mod error;
mod event;
mod model;
pub mod parameters;
mod shared;
