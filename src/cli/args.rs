use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{
    DEFAULT_MAP_ZOOM, DEFAULT_OUTPUT_DIR, TAIPEI_MAIN_STATION_LAT, TAIPEI_MAIN_STATION_LON,
    TAIPEI_MAIN_STATION_NAME,
};

#[derive(Parser)]
#[command(name = "aqi-monitor")]
#[command(about = "Real-time Taiwan AQI maps and snapshots from the MOENV open-data API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        global = true,
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory for generated files"
    )]
    pub output_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch current readings, print a summary and write a CSV snapshot
    Fetch {
        #[arg(short, long, help = "Limit the number of records requested")]
        limit: Option<u32>,

        #[arg(long, default_value = "false", help = "Print the summary without writing files")]
        dry_run: bool,
    },

    /// Generate the interactive marker map
    Map {
        #[arg(short, long)]
        limit: Option<u32>,

        #[arg(long, help = "Map center latitude [default: mean of station coordinates]")]
        center_lat: Option<f64>,

        #[arg(long, help = "Map center longitude [default: mean of station coordinates]")]
        center_lon: Option<f64>,

        #[arg(short, long, default_value_t = DEFAULT_MAP_ZOOM)]
        zoom: u8,
    },

    /// Generate the AQI-weighted heatmap
    Heatmap {
        #[arg(short, long)]
        limit: Option<u32>,

        #[arg(long)]
        center_lat: Option<f64>,

        #[arg(long)]
        center_lon: Option<f64>,

        #[arg(short, long, default_value_t = DEFAULT_MAP_ZOOM)]
        zoom: u8,
    },

    /// Distance of every station to a reference point, as CSV plus summary
    Distance {
        #[arg(short, long)]
        limit: Option<u32>,

        #[arg(long, default_value_t = TAIPEI_MAIN_STATION_LAT)]
        ref_lat: f64,

        #[arg(long, default_value_t = TAIPEI_MAIN_STATION_LON)]
        ref_lon: f64,

        #[arg(long, default_value = TAIPEI_MAIN_STATION_NAME)]
        ref_name: String,
    },

    /// Full pipeline: CSV snapshot, marker map and heatmap in one run
    Report {
        #[arg(short, long)]
        limit: Option<u32>,

        #[arg(short, long, default_value_t = DEFAULT_MAP_ZOOM)]
        zoom: u8,
    },
}
