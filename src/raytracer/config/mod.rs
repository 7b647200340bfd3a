mod config_builder;
mod error;
mod fields;
mod files;
#[cfg(test)]
mod test_support;

pub use config_builder::{translate, translate_str};
pub use error::{ConfigError, ConfigResult};
