use super::LogLevel;

/// Supersampling antialiasing settings
#[derive(Debug, Clone, PartialEq)]
pub struct SsaaOptions {
    pub active: bool,
    /// Subsamples traced per pixel once supersampling kicks in
    pub sample_count: usize,
    pub threshold: f64,
    pub resolution_multiplier: f64,
    /// Width in pixels of the band around a detected edge that is supersampled
    pub boundary_size: u16,
}

impl Default for SsaaOptions {
    fn default() -> Self {
        Self {
            active: true,
            sample_count: 4,
            threshold: 3.0,
            resolution_multiplier: 5.0,
            boundary_size: 1,
        }
    }
}

/// Rendering parameters handed to the renderer
///
/// `batch_size` predates the grid layout. Both are kept as independent
/// fields; neither is derived from the other.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererOptions {
    pub ssaa: SsaaOptions,
    pub batch_size: usize,
    pub grid_width: usize,
    pub grid_height: usize,
    pub adaptive_tracing: bool,
    /// Mirrors the root level, set by the options builder
    pub log_level: LogLevel,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            ssaa: SsaaOptions::default(),
            batch_size: 640,
            grid_width: 640,
            grid_height: 1,
            adaptive_tracing: true,
            log_level: LogLevel::default(),
        }
    }
}
