use clap::Parser;
use std::process::ExitCode;
use tabcsv::args::Args;
use tabcsv::{config, logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_level());

    let config = match config::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("resolved configuration: {config:?}");

    match tabcsv_engine::run(&config) {
        Ok(report) => {
            presentation::print_report(&report, args.output.format);
            if args.behavior.strict && !report.is_clean() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
