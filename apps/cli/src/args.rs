//! Command line definition.

use clap::{Parser, Subcommand};
use locus_logger::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "locus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Resolve postcodes, grid references, three-word addresses and coordinates to WGS84")]
pub(crate) struct Cli {
    /// Configuration file (TOML, JSON or YAML). `LOCUS__*` variables override it.
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Minimum level for diagnostics on stderr.
    #[arg(long, global = true, default_value = "warn")]
    pub(crate) log_level: LevelFilter,

    /// Emit diagnostics as JSON lines.
    #[arg(long, global = true)]
    pub(crate) json_logs: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Resolve one location string
    #[command(allow_negative_numbers = true)]
    Resolve {
        input: String,
        /// Three-word address API key (defaults to the configured one)
        #[arg(long)]
        key: Option<String>,
    },
    /// Show which notation a string is recognised as
    #[command(allow_negative_numbers = true)]
    Detect { input: String },
    /// Resolve every line of a file, or stdin with `-`
    Batch {
        file: PathBuf,
        #[arg(long)]
        key: Option<String>,
    },
    /// Convert a national grid reference to WGS84
    Grid { reference: String },
    /// Convert a WGS84 point to a national grid reference
    #[command(allow_negative_numbers = true)]
    ToGrid {
        lat: f64,
        lng: f64,
        /// Total digits, even, 2 to 10
        #[arg(long, default_value_t = 10)]
        digits: usize,
    },
    /// Point reached from a start point along a bearing
    #[command(allow_negative_numbers = true)]
    Destination { lat: f64, lng: f64, bearing: f64, distance_m: f64 },
    /// Initial bearing between two points
    #[command(allow_negative_numbers = true)]
    Bearing { lat1: f64, lng1: f64, lat2: f64, lng2: f64 },
    /// Great-circle distance between two points
    #[command(allow_negative_numbers = true)]
    Distance { lat1: f64, lng1: f64, lat2: f64, lng2: f64 },
    /// Closed outline of a directional coverage sector
    #[command(allow_negative_numbers = true)]
    Sector {
        lat: f64,
        lng: f64,
        azimuth: f64,
        radius_m: f64,
        #[arg(long, default_value_t = locus::features::geodesy::DEFAULT_BEAMWIDTH_DEG)]
        beamwidth: f64,
        #[arg(long, default_value_t = 32)]
        steps: usize,
    },
}
