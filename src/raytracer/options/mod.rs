mod log_level;
mod renderer;
mod tracer;
mod world;

pub use log_level::LogLevel;
pub use renderer::{RendererOptions, SsaaOptions};
pub use tracer::{RayTracerOptions, RayTracerOptionsBuilder};
pub use world::WorldOptions;
