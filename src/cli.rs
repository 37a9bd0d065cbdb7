//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "truck-measure")]
#[command(version)]
#[command(about = "Measure real-world dimensions from truck photos")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Measure a region on a photographed truck
    Measure {
        /// Path to image file
        image: PathBuf,

        /// Region to measure as "x,y,w,h" in pixels. Defaults to the
        /// detected truck bounding box.
        #[arg(long, short = 'r')]
        region: Option<String>,

        /// Read detections from a JSON file instead of running the
        /// configured detector command
        #[arg(long, short = 'd')]
        detections: Option<PathBuf>,

        /// Resize factor applied before detection (e.g. 0.6). Uses config
        /// value if not specified.
        #[arg(long)]
        resize_scale: Option<f64>,

        /// Append the measurement record to a JSON results file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List supported truck types and their reference heights
    Types,

    /// Export measurement records to CSV
    Export {
        /// Path to JSON results file
        results: PathBuf,

        /// Output CSV file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set external detector command
        #[arg(long)]
        set_detector_cmd: Option<String>,

        /// Set detector minimum confidence (0.0-1.0)
        #[arg(long)]
        set_min_conf: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default resize scale
        #[arg(long)]
        set_resize_scale: Option<f64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
