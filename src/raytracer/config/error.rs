use std::path::PathBuf;

/// Result type for configuration translation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while turning a configuration document into options
///
/// None of these are recoverable: a render job must not start on a
/// configuration that failed to translate.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read configuration file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration document {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value for '{key}': expected {expected}, found {found}")]
    SchemaType {
        key: String,
        expected: &'static str,
        found: String,
    },

    #[error("invalid file pattern '{pattern}' in '{key}': {source}")]
    Pattern {
        key: String,
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl ConfigError {
    pub fn schema_type(key: impl Into<String>, expected: &'static str, found: impl Into<String>) -> Self {
        ConfigError::SchemaType {
            key: key.into(),
            expected,
            found: found.into(),
        }
    }

    /// Dotted key path of the offending entry, when the error concerns one
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::SchemaType { key, .. } | ConfigError::Pattern { key, .. } => Some(key),
            ConfigError::FileAccess { .. } | ConfigError::Parse { .. } => None,
        }
    }
}
