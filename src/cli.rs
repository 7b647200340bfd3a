use crate::raytracer::LogLevel;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Reads a process log level
///
/// Takes the `log` crate names (`off`, `error` .. `trace`) as well as the
/// renderer verbosities used in job files (`none`, `minimal`, `detailed`
/// or `0`-`2`), which map the same way the document's `log-level` does.
fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>()
        .or_else(|_| s.parse::<LogLevel>().map(LevelFilter::from))
        .map_err(|_| format!("unknown log level '{s}'"))
}

#[derive(Debug, Parser)]
#[command(name = "atlas-options")]
#[command(about = "Resolve a ray tracer job configuration and report the options it produces")]
pub struct Args {
    /// YAML job configuration
    #[arg(default_value = "config.yaml")]
    pub config: PathBuf,

    /// Override the log level; otherwise RUST_LOG, then the configuration's `log-level`, decide
    #[arg(long, value_parser = parse_level)]
    pub log_level: Option<LevelFilter>,
}
