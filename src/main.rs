use atlas_options::cli::Args;
use atlas_options::logger::{init_logger, set_level};
use atlas_options::translate;
use clap::Parser;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let level_source = init_logger(args.log_level);

    let options = match translate(&args.config) {
        Ok(options) => options,
        Err(e) => {
            error!("Configuration rejected: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(level) = level_source.document_level(options.log_level()) {
        set_level(level);
    }

    options.print_summary();
    ExitCode::SUCCESS
}
