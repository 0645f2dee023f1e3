use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{AqiError, Result};
use crate::models::StationReading;
use crate::utils::constants::{
    TAIPEI_MAIN_STATION_LAT, TAIPEI_MAIN_STATION_LON, TAIPEI_MAIN_STATION_NAME,
};
use crate::utils::coordinates::haversine_distance;

/// The point distances are measured from
#[derive(Debug, Clone)]
pub struct ReferencePoint {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ReferencePoint {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn taipei_main_station() -> Self {
        Self::new(
            TAIPEI_MAIN_STATION_NAME,
            TAIPEI_MAIN_STATION_LAT,
            TAIPEI_MAIN_STATION_LON,
        )
    }
}

/// Distance bands relative to the reference point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceBand {
    #[serde(rename = "Taipei City")]
    TaipeiCity,
    #[serde(rename = "Greater Taipei")]
    GreaterTaipei,
    #[serde(rename = "Northern Taiwan")]
    NorthernTaiwan,
    #[serde(rename = "Central Taiwan")]
    CentralTaiwan,
    #[serde(rename = "Southern Taiwan")]
    SouthernTaiwan,
}

impl DistanceBand {
    pub const ALL: [DistanceBand; 5] = [
        DistanceBand::TaipeiCity,
        DistanceBand::GreaterTaipei,
        DistanceBand::NorthernTaiwan,
        DistanceBand::CentralTaiwan,
        DistanceBand::SouthernTaiwan,
    ];

    pub fn from_distance(distance_km: f64) -> Self {
        if distance_km <= 10.0 {
            DistanceBand::TaipeiCity
        } else if distance_km <= 30.0 {
            DistanceBand::GreaterTaipei
        } else if distance_km <= 100.0 {
            DistanceBand::NorthernTaiwan
        } else if distance_km <= 200.0 {
            DistanceBand::CentralTaiwan
        } else {
            DistanceBand::SouthernTaiwan
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DistanceBand::TaipeiCity => "Taipei City",
            DistanceBand::GreaterTaipei => "Greater Taipei",
            DistanceBand::NorthernTaiwan => "Northern Taiwan",
            DistanceBand::CentralTaiwan => "Central Taiwan",
            DistanceBand::SouthernTaiwan => "Southern Taiwan",
        }
    }
}

/// One station with its distance to the reference point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceRecord {
    pub site_id: String,
    pub site_name: String,
    pub county: String,
    pub latitude: f64,
    pub longitude: f64,
    pub aqi: Option<f64>,
    pub pm25: Option<f64>,
    pub status: String,
    pub distance_km: f64,
    pub band: DistanceBand,
}

#[derive(Debug, Clone)]
pub struct DistanceStatistics {
    pub total_stations: usize,
    pub min_distance: f64,
    pub max_distance: f64,
    pub mean_distance: f64,
    pub median_distance: f64,
    pub nearest: (String, String, f64),
    pub farthest: (String, String, f64),
    pub band_counts: Vec<(DistanceBand, usize)>,
}

impl DistanceStatistics {
    pub fn detailed_summary(&self, reference: &ReferencePoint) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Distance analysis ({}) ===", reference.name);
        let _ = writeln!(out, "Stations:        {}", self.total_stations);
        let _ = writeln!(out, "Nearest:         {:.2} km", self.min_distance);
        let _ = writeln!(out, "Farthest:        {:.2} km", self.max_distance);
        let _ = writeln!(out, "Mean distance:   {:.2} km", self.mean_distance);
        let _ = writeln!(out, "Median distance: {:.2} km", self.median_distance);
        let _ = writeln!(
            out,
            "\nNearest station:  {} ({}) - {:.2} km",
            self.nearest.0, self.nearest.1, self.nearest.2
        );
        let _ = writeln!(
            out,
            "Farthest station: {} ({}) - {:.2} km",
            self.farthest.0, self.farthest.1, self.farthest.2
        );
        let _ = writeln!(out, "\nBand distribution:");
        for (band, count) in &self.band_counts {
            let _ = writeln!(out, "  {:<16}: {}", band.label(), count);
        }
        out
    }
}

pub struct DistanceAnalyzer {
    reference: ReferencePoint,
}

impl DistanceAnalyzer {
    pub fn new() -> Self {
        Self {
            reference: ReferencePoint::taipei_main_station(),
        }
    }

    pub fn with_reference(reference: ReferencePoint) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferencePoint {
        &self.reference
    }

    /// Distance of every valid-coordinate reading to the reference
    /// point, sorted nearest first.
    pub fn analyze(&self, readings: &[StationReading]) -> Result<Vec<DistanceRecord>> {
        let mut records: Vec<DistanceRecord> = readings
            .iter()
            .filter(|r| r.has_coordinates())
            .map(|r| {
                // has_coordinates() guarantees both are present
                let latitude = r.latitude.unwrap_or_default();
                let longitude = r.longitude.unwrap_or_default();
                let distance_km = haversine_distance(
                    latitude,
                    longitude,
                    self.reference.latitude,
                    self.reference.longitude,
                );

                DistanceRecord {
                    site_id: r.site_id.clone(),
                    site_name: r.site_name.clone(),
                    county: r.county.clone(),
                    latitude,
                    longitude,
                    aqi: r.aqi,
                    pm25: r.pm25,
                    status: r.status.clone(),
                    distance_km,
                    band: DistanceBand::from_distance(distance_km),
                }
            })
            .collect();

        if records.is_empty() {
            return Err(AqiError::MissingData(
                "no readings with valid coordinates".to_string(),
            ));
        }

        records.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        Ok(records)
    }

    /// Summary over records produced by [`DistanceAnalyzer::analyze`]
    pub fn statistics(&self, records: &[DistanceRecord]) -> Result<DistanceStatistics> {
        if records.is_empty() {
            return Err(AqiError::MissingData(
                "no distance records to summarize".to_string(),
            ));
        }

        let total = records.len();
        let sum: f64 = records.iter().map(|r| r.distance_km).sum();

        // Records arrive sorted by distance
        let median = if total % 2 == 1 {
            records[total / 2].distance_km
        } else {
            (records[total / 2 - 1].distance_km + records[total / 2].distance_km) / 2.0
        };

        let nearest = &records[0];
        let farthest = &records[total - 1];

        let band_counts = DistanceBand::ALL
            .iter()
            .map(|&band| (band, records.iter().filter(|r| r.band == band).count()))
            .collect();

        Ok(DistanceStatistics {
            total_stations: total,
            min_distance: nearest.distance_km,
            max_distance: farthest.distance_km,
            mean_distance: sum / total as f64,
            median_distance: median,
            nearest: (
                nearest.site_name.clone(),
                nearest.county.clone(),
                nearest.distance_km,
            ),
            farthest: (
                farthest.site_name.clone(),
                farthest.county.clone(),
                farthest.distance_km,
            ),
            band_counts,
        })
    }
}

impl Default for DistanceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(site: &str, county: &str, coords: Option<(f64, f64)>) -> StationReading {
        StationReading {
            site_id: site.to_string(),
            site_name: site.to_string(),
            county: county.to_string(),
            aqi: Some(50.0),
            pm25: Some(10.0),
            pm10: None,
            o3: None,
            co: None,
            no2: None,
            so2: None,
            status: "Good".to_string(),
            pollutant: String::new(),
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
            publish_time: None,
            wind_speed: None,
            wind_direction: None,
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(DistanceBand::from_distance(10.0), DistanceBand::TaipeiCity);
        assert_eq!(
            DistanceBand::from_distance(10.01),
            DistanceBand::GreaterTaipei
        );
        assert_eq!(
            DistanceBand::from_distance(30.0),
            DistanceBand::GreaterTaipei
        );
        assert_eq!(
            DistanceBand::from_distance(100.0),
            DistanceBand::NorthernTaiwan
        );
        assert_eq!(
            DistanceBand::from_distance(200.0),
            DistanceBand::CentralTaiwan
        );
        assert_eq!(
            DistanceBand::from_distance(250.0),
            DistanceBand::SouthernTaiwan
        );
    }

    #[test]
    fn test_analyze_sorts_and_skips_missing_coordinates() {
        let readings = vec![
            reading("Kaohsiung", "Kaohsiung City", Some((22.63, 120.30))),
            reading("Zhongshan", "Taipei City", Some((25.06, 121.53))),
            reading("Orphan", "Nowhere", None),
        ];

        let analyzer = DistanceAnalyzer::new();
        let records = analyzer.analyze(&readings).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].site_name, "Zhongshan");
        assert!(records[0].distance_km < records[1].distance_km);
        assert_eq!(records[0].band, DistanceBand::TaipeiCity);
        assert_eq!(records[1].band, DistanceBand::SouthernTaiwan);
    }

    #[test]
    fn test_statistics() {
        let readings = vec![
            reading("Zhongshan", "Taipei City", Some((25.06, 121.53))),
            reading("Banqiao", "New Taipei City", Some((25.01, 121.46))),
            reading("Kaohsiung", "Kaohsiung City", Some((22.63, 120.30))),
        ];

        let analyzer = DistanceAnalyzer::new();
        let records = analyzer.analyze(&readings).unwrap();
        let stats = analyzer.statistics(&records).unwrap();

        assert_eq!(stats.total_stations, 3);
        assert_eq!(stats.nearest.0, "Zhongshan");
        assert_eq!(stats.farthest.0, "Kaohsiung");
        assert!(stats.min_distance <= stats.median_distance);
        assert!(stats.median_distance <= stats.max_distance);
    }

    #[test]
    fn test_no_coordinates_is_an_error() {
        let readings = vec![reading("Orphan", "Nowhere", None)];
        assert!(DistanceAnalyzer::new().analyze(&readings).is_err());
    }

    #[test]
    fn test_custom_reference_point() {
        let analyzer =
            DistanceAnalyzer::with_reference(ReferencePoint::new("Kaohsiung", 22.63, 120.30));
        let readings = vec![reading("Kaohsiung", "Kaohsiung City", Some((22.63, 120.30)))];

        let records = analyzer.analyze(&readings).unwrap();
        assert!(records[0].distance_km < 0.5);
        assert_eq!(records[0].band, DistanceBand::TaipeiCity);
    }
}
