use std::path::Path;

use crate::analyzers::DistanceRecord;
use crate::error::Result;
use crate::models::StationReading;

/// Flat-file CSV persistence for readings and distance records
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the full record set as a CSV snapshot
    pub fn write_readings(&self, readings: &[StationReading], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        for reading in readings {
            writer.serialize(reading)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Read a snapshot back; used to verify round trips
    pub fn read_readings(&self, path: &Path) -> Result<Vec<StationReading>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut readings = Vec::new();
        for result in reader.deserialize() {
            readings.push(result?);
        }
        Ok(readings)
    }

    pub fn write_distances(&self, records: &[DistanceRecord], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn reading(site: &str, aqi: Option<f64>) -> StationReading {
        StationReading {
            site_id: "12".to_string(),
            site_name: site.to_string(),
            county: "Keelung City".to_string(),
            aqi,
            pm25: Some(10.0),
            pm10: None,
            o3: Some(41.3),
            co: Some(0.25),
            no2: None,
            so2: Some(1.1),
            status: "Good".to_string(),
            pollutant: String::new(),
            latitude: Some(25.129167),
            longitude: Some(121.760056),
            publish_time: NaiveDate::from_ymd_opt(2026, 2, 26)
                .and_then(|d| d.and_hms_opt(14, 0, 0)),
            wind_speed: Some(2.4),
            wind_direction: Some(70.0),
        }
    }

    #[test]
    fn test_readings_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.csv");

        let readings = vec![reading("Keelung", Some(45.0)), reading("Xizhi", None)];

        let writer = CsvWriter::new();
        writer.write_readings(&readings, &path).unwrap();
        let restored = writer.read_readings(&path).unwrap();

        assert_eq!(restored.len(), readings.len());
        assert_eq!(restored[0].aqi, Some(45.0));
        assert_eq!(restored[1].aqi, None);
        assert_eq!(restored[0].site_name, "Keelung");
        assert_eq!(restored[0].publish_time, readings[0].publish_time);
        assert_eq!(restored[1].pm10, None);
    }

    #[test]
    fn test_creates_missing_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/snapshot.csv");

        let writer = CsvWriter::new();
        writer.write_readings(&[reading("Keelung", Some(45.0))], &path).unwrap();

        assert!(path.exists());
    }
}
