pub mod config;
pub mod options;

pub use config::{translate, translate_str, ConfigError, ConfigResult};
pub use options::{LogLevel, RayTracerOptions, RayTracerOptionsBuilder, RendererOptions, SsaaOptions, WorldOptions};
