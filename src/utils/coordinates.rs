use crate::utils::constants::EARTH_RADIUS_KM;

/// Check that a latitude/longitude pair is usable for spatial rendering.
///
/// The MOENV feed occasionally reports stations with missing coordinates
/// as literal zeros, so (0, 0) is treated as missing.
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return false;
    }
    !(latitude == 0.0 && longitude == 0.0)
}

/// Calculate the distance between two points using the Haversine formula
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert!(is_valid_coordinate(25.0478, 121.5170)); // Taipei
        assert!(is_valid_coordinate(21.9, 120.8)); // Hengchun
        assert!(!is_valid_coordinate(0.0, 0.0));
        assert!(!is_valid_coordinate(91.0, 121.0));
        assert!(!is_valid_coordinate(25.0, 181.0));
    }

    #[test]
    fn test_haversine_distance() {
        // Taipei Main Station to Kaohsiung Main Station
        let distance = haversine_distance(25.0478, 121.5170, 22.6394, 120.3022);
        assert!((distance - 295.0).abs() < 10.0);
    }

    #[test]
    fn test_haversine_zero_distance() {
        let distance = haversine_distance(25.0478, 121.5170, 25.0478, 121.5170);
        assert!(distance.abs() < 1e-9);
    }
}
