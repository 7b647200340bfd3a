use super::LogLevel;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Terrain inputs of the scene
///
/// File sets are ordered so that the same configuration always yields the
/// same loading order.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldOptions {
    pub dem_files: BTreeSet<PathBuf>,
    pub dom_files: BTreeSet<PathBuf>,
    /// Number of renders a raster may sit unused before it is released
    pub raster_usage_threshold: u16,
    pub min_resolution: f64,
    /// Mirrors the root level, set by the options builder
    pub log_level: LogLevel,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            dem_files: BTreeSet::new(),
            dom_files: BTreeSet::new(),
            raster_usage_threshold: 2,
            min_resolution: 0.0,
            log_level: LogLevel::default(),
        }
    }
}

impl WorldOptions {
    /// Creates world options from explicit DEM and DOM file lists
    ///
    /// Repeated paths collapse into one entry.
    pub fn new<D, O>(dem_files: D, dom_files: O) -> Self
    where
        D: IntoIterator,
        D::Item: Into<PathBuf>,
        O: IntoIterator,
        O::Item: Into<PathBuf>,
    {
        Self {
            dem_files: dem_files.into_iter().map(Into::into).collect(),
            dom_files: dom_files.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// World options for a single DEM/DOM pair
    pub fn single(dem: impl Into<PathBuf>, dom: impl Into<PathBuf>) -> Self {
        Self::new([dem], [dom])
    }
}
