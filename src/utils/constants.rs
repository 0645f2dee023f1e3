/// MOENV open-data API
pub const API_BASE_URL: &str = "https://data.moenv.gov.tw/api/v2";
pub const AQI_DATASET_ID: &str = "aqx_p_432";
pub const API_KEY_ENV_VAR: &str = "MOENV_API_KEY";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Output file name prefixes
pub const CSV_PREFIX: &str = "aqi_data";
pub const MAP_PREFIX: &str = "aqi_map";
pub const HEATMAP_PREFIX: &str = "aqi_heatmap";
pub const DISTANCE_PREFIX: &str = "aqi_distance_analysis";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Map defaults (roughly the geographic center of Taiwan)
pub const DEFAULT_MAP_CENTER_LAT: f64 = 23.8;
pub const DEFAULT_MAP_CENTER_LON: f64 = 120.9;
pub const DEFAULT_MAP_ZOOM: u8 = 8;

/// Marker sizing
pub const BASE_MARKER_RADIUS: f64 = 10.0;
pub const MARKER_RADIUS_PER_AQI: f64 = 1.0 / 20.0;
pub const MISSING_AQI_MARKER_RADIUS: f64 = 8.0;

/// Color used for stations without an AQI value
pub const MISSING_AQI_COLOR: &str = "#808080";

/// Heatmap intensity is scaled against this AQI value
pub const HEATMAP_MAX_AQI: f64 = 300.0;

/// Distance analysis reference point
pub const TAIPEI_MAIN_STATION_NAME: &str = "Taipei Main Station";
pub const TAIPEI_MAIN_STATION_LAT: f64 = 25.0478;
pub const TAIPEI_MAIN_STATION_LON: f64 = 121.5170;

/// Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;
