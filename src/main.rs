//! Truck Measure - real-world dimensions from truck photos
//!
//! A CLI tool that turns a detector bounding box and a known truck height
//! into a pixel-to-metric scale and measures selected regions with it.

use clap::Parser;
use truck_measure::cli::Cli;
use truck_measure::commands;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
