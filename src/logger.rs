use crate::raytracer::LogLevel;
use log::LevelFilter;

const FILTER_ENV: &str = "RUST_LOG";

/// Where the process log level is decided
///
/// Precedence: `--log-level` flag, then a non-empty `RUST_LOG`, then the
/// configuration document's `log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSource {
    Flag(LevelFilter),
    Environment,
    Document,
}

impl LevelSource {
    pub fn resolve(flag: Option<LevelFilter>, env_filter: Option<&str>) -> Self {
        match (flag, env_filter) {
            (Some(level), _) => LevelSource::Flag(level),
            (None, Some(filter)) if !filter.trim().is_empty() => LevelSource::Environment,
            _ => LevelSource::Document,
        }
    }

    /// Level to apply once the document has been read, if the document decides
    pub fn document_level(self, level: LogLevel) -> Option<LevelFilter> {
        match self {
            LevelSource::Document => Some(level.into()),
            LevelSource::Flag(_) | LevelSource::Environment => None,
        }
    }
}

/// Initialize the logger
///
/// `RUST_LOG` directives are honoured unless the flag overrides them. When
/// the document decides, records up to `Trace` pass the logger's own filter
/// and the active level starts at `Info` until [`set_level`] is called.
pub fn init_logger(flag: Option<LevelFilter>) -> LevelSource {
    let env_filter = std::env::var(FILTER_ENV).ok();
    let source = LevelSource::resolve(flag, env_filter.as_deref());

    let mut builder = env_logger::Builder::from_env(FILTER_ENV);
    builder.format_timestamp(None);
    match source {
        LevelSource::Flag(level) => {
            builder.filter_level(level);
        }
        LevelSource::Environment => {}
        LevelSource::Document => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();

    if source == LevelSource::Document {
        set_level(LevelFilter::Info);
    }
    source
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_environment() {
        let source = LevelSource::resolve(Some(LevelFilter::Error), Some("debug"));
        assert_eq!(source, LevelSource::Flag(LevelFilter::Error));
        assert_eq!(source.document_level(LogLevel::Detailed), None);
    }

    #[test]
    fn test_environment_wins_over_document() {
        let source = LevelSource::resolve(None, Some("warn"));
        assert_eq!(source, LevelSource::Environment);
        assert_eq!(source.document_level(LogLevel::Detailed), None);
    }

    #[test]
    fn test_empty_environment_defers_to_document() {
        assert_eq!(LevelSource::resolve(None, Some("  ")), LevelSource::Document);
        let source = LevelSource::resolve(None, None);
        assert_eq!(source, LevelSource::Document);
        assert_eq!(source.document_level(LogLevel::Detailed), Some(LevelFilter::Debug));
        assert_eq!(source.document_level(LogLevel::None), Some(LevelFilter::Warn));
    }
}
