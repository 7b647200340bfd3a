use log::LevelFilter;
use std::fmt;
use std::str::FromStr;

/// Verbosity of the renderer's own progress reporting
///
/// The numeric codes match the ones accepted in configuration files:
/// `0` = none, `1` = minimal, `2` = detailed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    None,
    #[default]
    Minimal,
    Detailed,
}

impl LogLevel {
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::None => "none",
            LogLevel::Minimal => "minimal",
            LogLevel::Detailed => "detailed",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            LogLevel::None => 0,
            LogLevel::Minimal => 1,
            LogLevel::Detailed => 2,
        }
    }
}

impl TryFrom<i64> for LogLevel {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(LogLevel::None),
            1 => Ok(LogLevel::Minimal),
            2 => Ok(LogLevel::Detailed),
            _ => Err(format!("unknown log level code {code}")),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Accepts the level name in any case, or its numeric code written as text
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return LogLevel::try_from(code);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "none" => Ok(LogLevel::None),
            "minimal" => Ok(LogLevel::Minimal),
            "detailed" => Ok(LogLevel::Detailed),
            _ => Err(format!("unknown log level '{trimmed}'")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Process logger filter matching a renderer verbosity
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::None => LevelFilter::Warn,
            LogLevel::Minimal => LevelFilter::Info,
            LogLevel::Detailed => LevelFilter::Debug,
        }
    }
}
