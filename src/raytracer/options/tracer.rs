use super::{LogLevel, RendererOptions, WorldOptions};
use log::info;

/// Options for one render job
///
/// The value is immutable once built: fields are private and only
/// reachable through the read-only accessors below. Use
/// [`RayTracerOptions::builder`] to assemble one.
#[derive(Debug, Clone, PartialEq)]
pub struct RayTracerOptions {
    thread_count: usize,
    log_level: LogLevel,
    renderer: RendererOptions,
    world: WorldOptions,
}

impl Default for RayTracerOptions {
    fn default() -> Self {
        RayTracerOptionsBuilder::new(1, LogLevel::default()).build()
    }
}

impl RayTracerOptions {
    /// Starts a builder from the two values every render job needs
    pub fn builder(thread_count: usize, log_level: LogLevel) -> RayTracerOptionsBuilder {
        RayTracerOptionsBuilder::new(thread_count, log_level)
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn renderer(&self) -> &RendererOptions {
        &self.renderer
    }

    pub fn world(&self) -> &WorldOptions {
        &self.world
    }

    /// Returns a copy running at another verbosity
    ///
    /// The nested renderer and world levels follow the root level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self.renderer.log_level = level;
        self.world.log_level = level;
        self
    }

    pub fn print_summary(&self) {
        let ssaa = &self.renderer.ssaa;
        info!("Ray tracer options:");
        info!("Threads: {}, log level: {}", self.thread_count, self.log_level);
        info!(
            "Rendering: grid {}x{}, batch size {}, adaptive tracing {}",
            self.renderer.grid_width,
            self.renderer.grid_height,
            self.renderer.batch_size,
            self.renderer.adaptive_tracing
        );
        info!(
            "SSAA: active {}, subsamples {}, threshold {}, resolution multiplier {}, boundary {}",
            ssaa.active, ssaa.sample_count, ssaa.threshold, ssaa.resolution_multiplier, ssaa.boundary_size
        );
        info!(
            "World: {} DEM file(s), {} DOM file(s), raster usage threshold {}, min resolution {}",
            self.world.dem_files.len(),
            self.world.dom_files.len(),
            self.world.raster_usage_threshold,
            self.world.min_resolution
        );
        for path in &self.world.dem_files {
            info!("  DEM {}", path.display());
        }
        for path in &self.world.dom_files {
            info!("  DOM {}", path.display());
        }
    }
}

/// Collects the resolved sections of a [`RayTracerOptions`] value
///
/// Nothing is visible to the renderer until [`build`](Self::build) hands
/// over the finished value.
#[derive(Debug, Clone)]
pub struct RayTracerOptionsBuilder {
    thread_count: usize,
    log_level: LogLevel,
    renderer: RendererOptions,
    world: WorldOptions,
}

impl RayTracerOptionsBuilder {
    pub fn new(thread_count: usize, log_level: LogLevel) -> Self {
        Self {
            thread_count,
            log_level,
            renderer: RendererOptions::default(),
            world: WorldOptions::default(),
        }
    }

    pub fn renderer(mut self, renderer: RendererOptions) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn world(mut self, world: WorldOptions) -> Self {
        self.world = world;
        self
    }

    pub fn build(self) -> RayTracerOptions {
        RayTracerOptions {
            thread_count: self.thread_count,
            log_level: self.log_level,
            renderer: self.renderer,
            world: self.world,
        }
        .with_log_level(self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RayTracerOptions::default();
        assert_eq!(opts.thread_count(), 1);
        assert_eq!(opts.log_level(), LogLevel::Minimal);
        assert_eq!(opts.renderer(), &RendererOptions::default());
        assert_eq!(opts.world(), &WorldOptions::default());
    }

    #[test]
    fn test_build_propagates_log_level() {
        let opts = RayTracerOptions::builder(6, LogLevel::Detailed).build();
        assert_eq!(opts.thread_count(), 6);
        assert_eq!(opts.renderer().log_level, LogLevel::Detailed);
        assert_eq!(opts.world().log_level, LogLevel::Detailed);
    }

    #[test]
    fn test_builder_overrides_level_of_supplied_sections() {
        let renderer = RendererOptions {
            log_level: LogLevel::None,
            batch_size: 32,
            ..RendererOptions::default()
        };
        let opts = RayTracerOptions::builder(1, LogLevel::Detailed)
            .renderer(renderer)
            .build();
        assert_eq!(opts.renderer().batch_size, 32);
        assert_eq!(opts.renderer().log_level, LogLevel::Detailed);
    }

    #[test]
    fn test_with_log_level_updates_every_section() {
        let opts = RayTracerOptions::default().with_log_level(LogLevel::None);
        assert_eq!(opts.log_level(), LogLevel::None);
        assert_eq!(opts.renderer().log_level, LogLevel::None);
        assert_eq!(opts.world().log_level, LogLevel::None);
    }

    #[test]
    fn test_builder_keeps_world() {
        let world = WorldOptions::single("moon.tif", "moon_dom.tif");
        let opts = RayTracerOptions::builder(2, LogLevel::Minimal)
            .world(world.clone())
            .build();
        assert_eq!(opts.world().dem_files, world.dem_files);
        assert_eq!(opts.world().dom_files, world.dom_files);
    }
}
