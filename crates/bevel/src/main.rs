// Author: Dustin Pilgrim
// License: MIT

mod cli;
mod logging;
mod paths;
mod print;
mod run;

use clap::Parser;

use cli::Args;

fn main() {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| paths::default_log_path("bevel.log"));

    if let Err(e) = logging::init_logging(&log_path, args.verbose) {
        // logging is not up yet; stderr is all we have
        eprintln!("bevel: failed to init logging: {e}");
        std::process::exit(1);
    }

    eventline::info!("bevel starting");
    eventline::debug!("verbose={}", args.verbose);
    eventline::debug!("log_path={}", log_path.display());

    if let Err(e) = run::run(args) {
        eventline::error!("fatal error: {e}");
        eprintln!("bevel: {e}");
        std::process::exit(1);
    }
}
