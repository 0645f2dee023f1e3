use serde::{Deserialize, Serialize};

/// AQI severity bands with the standard breakpoint table.
///
/// Boundaries are inclusive: an AQI of exactly 50 is Good, 51 is
/// Moderate, and so on up to 301+ for Hazardous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitive,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Classify an AQI value against the breakpoint table
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi <= 50.0 {
            AqiCategory::Good
        } else if aqi <= 100.0 {
            AqiCategory::Moderate
        } else if aqi <= 150.0 {
            AqiCategory::UnhealthyForSensitive
        } else if aqi <= 200.0 {
            AqiCategory::Unhealthy
        } else if aqi <= 300.0 {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    /// Marker and heatmap color for this band
    pub fn color(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#00E400",
            AqiCategory::Moderate => "#FFFF00",
            AqiCategory::UnhealthyForSensitive => "#FF7E00",
            AqiCategory::Unhealthy => "#FF0000",
            AqiCategory::VeryUnhealthy => "#8F3F97",
            AqiCategory::Hazardous => "#7E0023",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    pub fn range_label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "0-50",
            AqiCategory::Moderate => "51-100",
            AqiCategory::UnhealthyForSensitive => "101-150",
            AqiCategory::Unhealthy => "151-200",
            AqiCategory::VeryUnhealthy => "201-300",
            AqiCategory::Hazardous => "301+",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundaries() {
        assert_eq!(AqiCategory::from_aqi(0.0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(50.0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(51.0), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(100.0), AqiCategory::Moderate);
        assert_eq!(
            AqiCategory::from_aqi(101.0),
            AqiCategory::UnhealthyForSensitive
        );
        assert_eq!(
            AqiCategory::from_aqi(150.0),
            AqiCategory::UnhealthyForSensitive
        );
        assert_eq!(AqiCategory::from_aqi(151.0), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_aqi(200.0), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_aqi(201.0), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_aqi(300.0), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_aqi(301.0), AqiCategory::Hazardous);
        assert_eq!(AqiCategory::from_aqi(500.0), AqiCategory::Hazardous);
    }

    #[test]
    fn test_boundary_colors() {
        assert_eq!(AqiCategory::from_aqi(50.0).color(), "#00E400");
        assert_eq!(AqiCategory::from_aqi(51.0).color(), "#FFFF00");
        assert_eq!(AqiCategory::from_aqi(150.0).color(), "#FF7E00");
        assert_eq!(AqiCategory::from_aqi(151.0).color(), "#FF0000");
        assert_eq!(AqiCategory::from_aqi(300.0).color(), "#8F3F97");
        assert_eq!(AqiCategory::from_aqi(301.0).color(), "#7E0023");
    }

    #[test]
    fn test_labels() {
        assert_eq!(AqiCategory::Good.label(), "Good");
        assert_eq!(AqiCategory::Hazardous.range_label(), "301+");
    }
}
