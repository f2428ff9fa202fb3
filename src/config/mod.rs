//! Configuration loading and validation.

mod file;
mod types;
mod validate;

pub use file::load_config_file;
pub use types::{Config, DownSampleConfig, NormalizeConfig, ZeroPeakPolicy};
pub use validate::validate_config;
