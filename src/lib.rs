//! Translation of YAML render-job descriptions into ray tracer options.
//!
//! The renderer itself is an external component; this crate produces the
//! fully resolved [`RayTracerOptions`] value it is constructed from.

pub mod cli;
pub mod logger;
pub mod raytracer;

pub use raytracer::{
    translate, translate_str, ConfigError, ConfigResult, LogLevel, RayTracerOptions,
    RayTracerOptionsBuilder, RendererOptions, SsaaOptions, WorldOptions,
};
