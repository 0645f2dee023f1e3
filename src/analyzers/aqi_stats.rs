use std::fmt::Write as _;

use crate::error::{AqiError, Result};
use crate::models::{AqiCategory, StationReading};

/// Per-run summary over the full record set.
///
/// Readings without coordinates still count here; only readings without
/// an AQI value are left out of the numeric aggregates.
#[derive(Debug, Clone)]
pub struct AqiStatistics {
    pub total_stations: usize,
    pub stations_with_data: usize,
    pub mean_aqi: f64,
    pub min_aqi: f64,
    pub max_aqi: f64,
    pub std_dev: f64,
    pub category_counts: Vec<(AqiCategory, usize)>,
}

impl AqiStatistics {
    pub fn category_count(&self, category: AqiCategory) -> usize {
        self.category_counts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn detailed_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== AQI Statistics ===");
        let _ = writeln!(
            out,
            "Stations:      {} total, {} reporting AQI",
            self.total_stations, self.stations_with_data
        );
        let _ = writeln!(out, "Mean AQI:      {:.1}", self.mean_aqi);
        let _ = writeln!(
            out,
            "AQI range:     {:.0} - {:.0}",
            self.min_aqi, self.max_aqi
        );
        let _ = writeln!(out, "Std deviation: {:.1}", self.std_dev);
        let _ = writeln!(out, "\nCategory distribution:");
        for (category, count) in &self.category_counts {
            let _ = writeln!(
                out,
                "  {:<33} ({:>7}): {}",
                category.label(),
                category.range_label(),
                count
            );
        }
        out
    }
}

pub struct AqiAnalyzer;

impl AqiAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_statistics(&self, readings: &[StationReading]) -> Result<AqiStatistics> {
        let values: Vec<f64> = readings.iter().filter_map(|r| r.aqi).collect();

        if values.is_empty() {
            return Err(AqiError::MissingData(
                "no readings with an AQI value".to_string(),
            ));
        }

        let mut min_aqi = f64::INFINITY;
        let mut max_aqi = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut counts = [0usize; 6];

        for &value in &values {
            if value < min_aqi {
                min_aqi = value;
            }
            if value > max_aqi {
                max_aqi = value;
            }
            sum += value;

            let index = AqiCategory::ALL
                .iter()
                .position(|&c| c == AqiCategory::from_aqi(value))
                .unwrap_or(0);
            counts[index] += 1;
        }

        let mean = sum / values.len() as f64;

        // Sample standard deviation, matching what pandas reports
        let std_dev = if values.len() > 1 {
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                / (values.len() - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        let category_counts = AqiCategory::ALL
            .iter()
            .zip(counts.iter())
            .map(|(&category, &count)| (category, count))
            .collect();

        Ok(AqiStatistics {
            total_stations: readings.len(),
            stations_with_data: values.len(),
            mean_aqi: mean,
            min_aqi,
            max_aqi,
            std_dev,
            category_counts,
        })
    }
}

impl Default for AqiAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
