use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::AqiCategory;
use crate::utils::constants::{
    BASE_MARKER_RADIUS, MARKER_RADIUS_PER_AQI, MISSING_AQI_COLOR, MISSING_AQI_MARKER_RADIUS,
};
use crate::utils::coordinates::is_valid_coordinate;

/// One AQI reading for one monitoring station at one publish time.
///
/// Pollutant fields are `None` when the feed reports an empty value,
/// a dash, or something unparseable. Immutable once parsed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StationReading {
    pub site_id: String,

    #[validate(length(min = 1))]
    pub site_name: String,

    pub county: String,

    pub aqi: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    pub co: Option<f64>,
    pub no2: Option<f64>,
    pub so2: Option<f64>,

    pub status: String,
    pub pollutant: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    pub publish_time: Option<NaiveDateTime>,

    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
}

impl StationReading {
    /// Whether this reading qualifies for spatial rendering
    pub fn has_coordinates(&self) -> bool {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => is_valid_coordinate(lat, lon),
            _ => false,
        }
    }

    pub fn has_aqi(&self) -> bool {
        self.aqi.is_some()
    }

    pub fn category(&self) -> Option<AqiCategory> {
        self.aqi.map(AqiCategory::from_aqi)
    }

    /// Marker fill/stroke color, gray when no AQI value was reported
    pub fn marker_color(&self) -> &'static str {
        self.category()
            .map(|c| c.color())
            .unwrap_or(MISSING_AQI_COLOR)
    }

    /// Marker radius scales with AQI so bad air stands out at a glance
    pub fn marker_radius(&self) -> f64 {
        match self.aqi {
            Some(aqi) => BASE_MARKER_RADIUS + aqi * MARKER_RADIUS_PER_AQI,
            None => MISSING_AQI_MARKER_RADIUS,
        }
    }

    pub fn aqi_display(&self) -> String {
        match self.aqi {
            Some(aqi) => format!("{:.0}", aqi),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(aqi: Option<f64>, lat: Option<f64>, lon: Option<f64>) -> StationReading {
        StationReading {
            site_id: "1".to_string(),
            site_name: "Banqiao".to_string(),
            county: "New Taipei City".to_string(),
            aqi,
            pm25: Some(12.0),
            pm10: Some(30.0),
            o3: Some(40.1),
            co: Some(0.3),
            no2: Some(8.5),
            so2: Some(1.2),
            status: "Good".to_string(),
            pollutant: String::new(),
            latitude: lat,
            longitude: lon,
            publish_time: None,
            wind_speed: Some(2.1),
            wind_direction: Some(90.0),
        }
    }

    #[test]
    fn test_coordinate_detection() {
        assert!(reading(Some(42.0), Some(25.01), Some(121.46)).has_coordinates());
        assert!(!reading(Some(42.0), None, Some(121.46)).has_coordinates());
        assert!(!reading(Some(42.0), Some(25.01), None).has_coordinates());
        assert!(!reading(Some(42.0), Some(0.0), Some(0.0)).has_coordinates());
    }

    #[test]
    fn test_marker_styling() {
        let good = reading(Some(40.0), Some(25.01), Some(121.46));
        assert_eq!(good.marker_color(), "#00E400");
        assert!((good.marker_radius() - 12.0).abs() < 1e-9);

        let missing = reading(None, Some(25.01), Some(121.46));
        assert_eq!(missing.marker_color(), "#808080");
        assert_eq!(missing.marker_radius(), 8.0);
        assert_eq!(missing.aqi_display(), "N/A");
    }

    #[test]
    fn test_validation_ranges() {
        let ok = reading(Some(40.0), Some(25.01), Some(121.46));
        assert!(ok.validate().is_ok());

        let bad = reading(Some(40.0), Some(91.0), Some(121.46));
        assert!(bad.validate().is_err());
    }
}
