use std::path::Path;

use crate::analyzers::{AqiAnalyzer, DistanceAnalyzer, ReferencePoint};
use crate::api::AqiClient;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::StationReading;
use crate::utils::filename::{
    default_csv_path, default_distance_path, default_heatmap_path, default_map_path,
};
use crate::utils::progress::ProgressReporter;
use crate::writers::{CsvWriter, MapWriter};

pub async fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Fetch { limit, dry_run } => {
            let readings = fetch(limit).await?;
            print_summary(&readings)?;

            if dry_run {
                println!("Dry run - no snapshot written");
                return Ok(());
            }

            let path = default_csv_path(&cli.output_dir);
            CsvWriter::new().write_readings(&readings, &path)?;
            println!("Snapshot saved to {}", path.display());
        }

        Commands::Map {
            limit,
            center_lat,
            center_lon,
            zoom,
        } => {
            let readings = fetch(limit).await?;
            let stats = AqiAnalyzer::new().calculate_statistics(&readings)?;

            let writer = map_writer(center_lat, center_lon, zoom);
            let path = default_map_path(&cli.output_dir);
            writer.write_marker_map(&readings, &stats, &path)?;

            println!(
                "Marker map with {} stations saved to {}",
                readings.iter().filter(|r| r.has_coordinates()).count(),
                path.display()
            );
        }

        Commands::Heatmap {
            limit,
            center_lat,
            center_lon,
            zoom,
        } => {
            let readings = fetch(limit).await?;

            let writer = map_writer(center_lat, center_lon, zoom);
            let path = default_heatmap_path(&cli.output_dir);
            writer.write_heatmap(&readings, &path)?;

            println!("Heatmap saved to {}", path.display());
        }

        Commands::Distance {
            limit,
            ref_lat,
            ref_lon,
            ref_name,
        } => {
            let readings = fetch(limit).await?;

            let analyzer =
                DistanceAnalyzer::with_reference(ReferencePoint::new(ref_name, ref_lat, ref_lon));
            let records = analyzer.analyze(&readings)?;
            let stats = analyzer.statistics(&records)?;

            println!("{}", stats.detailed_summary(analyzer.reference()));
            print_nearest(&records);

            let path = default_distance_path(&cli.output_dir);
            CsvWriter::new().write_distances(&records, &path)?;
            println!("Distance analysis saved to {}", path.display());
        }

        Commands::Report { limit, zoom } => {
            let readings = fetch(limit).await?;
            print_summary(&readings)?;

            write_report(&readings, &cli.output_dir, zoom)?;
            println!("Report complete - open the HTML files in a browser to view the maps");
        }
    }

    Ok(())
}

async fn fetch(limit: Option<u32>) -> Result<Vec<StationReading>> {
    let client = AqiClient::from_env()?;

    let progress = ProgressReporter::new_spinner("Fetching AQI readings...", false);
    let readings = client.fetch_readings(limit).await?;
    progress.finish_with_message(&format!("Fetched {} station readings", readings.len()));

    Ok(readings)
}

fn print_summary(readings: &[StationReading]) -> Result<()> {
    let stats = AqiAnalyzer::new().calculate_statistics(readings)?;
    println!("{}", stats.detailed_summary());
    Ok(())
}

/// First few stations, the way the original report listed them
fn print_nearest(records: &[crate::analyzers::DistanceRecord]) {
    println!("Nearest stations:");
    for record in records.iter().take(10) {
        println!(
            "  {:<12} {:<16} AQI {:>4}  {:>8.2} km  {}",
            record.site_name,
            record.county,
            record
                .aqi
                .map(|a| format!("{:.0}", a))
                .unwrap_or_else(|| "N/A".to_string()),
            record.distance_km,
            record.band.label()
        );
    }
    println!();
}

fn write_report(readings: &[StationReading], output_dir: &Path, zoom: u8) -> Result<()> {
    let stats = AqiAnalyzer::new().calculate_statistics(readings)?;

    let csv_path = default_csv_path(output_dir);
    CsvWriter::new().write_readings(readings, &csv_path)?;
    println!("Snapshot saved to {}", csv_path.display());

    let writer = MapWriter::new().with_zoom(zoom);
    let map_path = default_map_path(output_dir);
    writer.write_marker_map(readings, &stats, &map_path)?;
    println!("Marker map saved to {}", map_path.display());

    let heatmap_path = default_heatmap_path(output_dir);
    writer.write_heatmap(readings, &heatmap_path)?;
    println!("Heatmap saved to {}", heatmap_path.display());

    Ok(())
}

fn map_writer(center_lat: Option<f64>, center_lon: Option<f64>, zoom: u8) -> MapWriter {
    let mut writer = MapWriter::new().with_zoom(zoom);
    if let (Some(lat), Some(lon)) = (center_lat, center_lon) {
        writer = writer.with_center(lat, lon);
    }
    writer
}
