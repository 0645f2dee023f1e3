use chrono::Local;
use std::path::{Path, PathBuf};

use crate::utils::constants::{CSV_PREFIX, DISTANCE_PREFIX, HEATMAP_PREFIX, MAP_PREFIX};

/// Generate a timestamped filename: {prefix}_{YYYYMMDD_HHMMSS}.{extension}
pub fn timestamped_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}.{}", prefix, timestamp, extension)
}

/// Default path for the readings CSV snapshot
pub fn default_csv_path(output_dir: &Path) -> PathBuf {
    output_dir.join(timestamped_filename(CSV_PREFIX, "csv"))
}

/// Default path for the interactive marker map
pub fn default_map_path(output_dir: &Path) -> PathBuf {
    output_dir.join(timestamped_filename(MAP_PREFIX, "html"))
}

/// Default path for the heatmap
pub fn default_heatmap_path(output_dir: &Path) -> PathBuf {
    output_dir.join(timestamped_filename(HEATMAP_PREFIX, "html"))
}

/// Default path for the distance analysis CSV
pub fn default_distance_path(output_dir: &Path) -> PathBuf {
    output_dir.join(timestamped_filename(DISTANCE_PREFIX, "csv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_timestamped_filename_shape() {
        let name = timestamped_filename("aqi_data", "csv");

        assert!(name.starts_with("aqi_data_"));
        assert!(name.ends_with(".csv"));
        // "aqi_data_" + "YYYYMMDD_HHMMSS" + ".csv"
        assert_eq!(name.len(), "aqi_data_".len() + 15 + ".csv".len());
    }

    #[test]
    fn test_default_paths_land_in_output_dir() {
        let dir = Path::new("outputs");

        assert!(default_csv_path(dir).starts_with("outputs"));
        assert!(default_map_path(dir)
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("aqi_map_"));
        assert!(default_heatmap_path(dir)
            .to_string_lossy()
            .ends_with(".html"));
        assert!(default_distance_path(dir)
            .to_string_lossy()
            .ends_with(".csv"));
    }
}
