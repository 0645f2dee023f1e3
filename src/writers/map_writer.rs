use std::fmt::Write as _;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use crate::analyzers::AqiStatistics;
use crate::error::{AqiError, Result};
use crate::models::{AqiCategory, StationReading};
use crate::utils::constants::{DEFAULT_MAP_ZOOM, HEATMAP_MAX_AQI, MISSING_AQI_COLOR};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_HEAT_JS: &str = "https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js";
const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Marker payload embedded in the generated page. Serializing through
/// JSON keeps station names safe to splice into the script block.
#[derive(Serialize)]
struct MarkerDatum<'a> {
    name: &'a str,
    county: &'a str,
    lat: f64,
    lon: f64,
    aqi_display: String,
    label: &'static str,
    color: &'static str,
    radius: f64,
    status: &'a str,
}

/// Renders readings as self-contained Leaflet HTML pages
pub struct MapWriter {
    center: Option<(f64, f64)>,
    zoom: u8,
}

impl MapWriter {
    pub fn new() -> Self {
        Self {
            center: None,
            zoom: DEFAULT_MAP_ZOOM,
        }
    }

    /// Override the computed map center
    pub fn with_center(mut self, latitude: f64, longitude: f64) -> Self {
        self.center = Some((latitude, longitude));
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Render the interactive marker map with legend and statistics panel
    pub fn render_marker_map(
        &self,
        readings: &[StationReading],
        stats: &AqiStatistics,
    ) -> Result<String> {
        let spatial: Vec<&StationReading> =
            readings.iter().filter(|r| r.has_coordinates()).collect();

        if spatial.is_empty() {
            return Err(AqiError::MissingData(
                "no readings with valid coordinates to place on the map".to_string(),
            ));
        }

        let markers: Vec<MarkerDatum> = spatial
            .iter()
            .map(|r| MarkerDatum {
                name: &r.site_name,
                county: &r.county,
                lat: r.latitude.unwrap_or_default(),
                lon: r.longitude.unwrap_or_default(),
                aqi_display: r.aqi_display(),
                label: r.category().map(|c| c.label()).unwrap_or("No data"),
                color: r.marker_color(),
                radius: r.marker_radius(),
                status: &r.status,
            })
            .collect();
        let markers_json = serde_json::to_string(&markers)?;

        let (center_lat, center_lon) = self.resolve_center(&spatial);

        let mut html = String::new();
        self.push_head(&mut html, "Taiwan AQI Map", false);
        html.push_str("<body>\n<div id=\"map\"></div>\n");
        self.push_legend(&mut html);
        self.push_stats_panel(&mut html, stats);

        html.push_str("<script>\n");
        let _ = writeln!(
            html,
            "var map = L.map('map').setView([{:.6}, {:.6}], {});",
            center_lat, center_lon, self.zoom
        );
        self.push_tile_layer(&mut html);
        let _ = writeln!(html, "var stations = {};", markers_json);
        html.push_str(
            r#"stations.forEach(function (s) {
  var marker = L.circleMarker([s.lat, s.lon], {
    radius: s.radius,
    color: s.color,
    fillColor: s.color,
    fillOpacity: 0.7,
    weight: 2
  }).addTo(map);
  var popup = '<div class="popup">' +
    '<h4 style="color:' + s.color + '">' + s.name + '</h4>' +
    '<p><b>County:</b> ' + s.county + '</p>' +
    '<p><b>AQI:</b> <span class="aqi-value" style="color:' + s.color + '">' + s.aqi_display + '</span></p>' +
    '<p class="category">' + s.label + '</p>' +
    (s.status ? '<p><b>Status:</b> ' + s.status + '</p>' : '') +
    '</div>';
  marker.bindPopup(popup, {maxWidth: 300});
  marker.bindTooltip(s.name + ': AQI ' + s.aqi_display);
});
"#,
        );
        html.push_str("</script>\n</body>\n</html>\n");

        Ok(html)
    }

    /// Render the AQI-weighted heatmap
    pub fn render_heatmap(&self, readings: &[StationReading]) -> Result<String> {
        let spatial: Vec<&StationReading> = readings
            .iter()
            .filter(|r| r.has_coordinates() && r.has_aqi())
            .collect();

        if spatial.is_empty() {
            return Err(AqiError::MissingData(
                "no readings with both coordinates and an AQI value".to_string(),
            ));
        }

        let points: Vec<[f64; 3]> = spatial
            .iter()
            .map(|r| {
                [
                    r.latitude.unwrap_or_default(),
                    r.longitude.unwrap_or_default(),
                    r.aqi.unwrap_or_default(),
                ]
            })
            .collect();
        let points_json = serde_json::to_string(&points)?;

        let (center_lat, center_lon) = self.resolve_center(&spatial);

        let mut html = String::new();
        self.push_head(&mut html, "Taiwan AQI Heatmap", true);
        html.push_str("<body>\n<div id=\"map\"></div>\n");
        self.push_legend(&mut html);

        html.push_str("<script>\n");
        let _ = writeln!(
            html,
            "var map = L.map('map').setView([{:.6}, {:.6}], {});",
            center_lat, center_lon, self.zoom
        );
        self.push_tile_layer(&mut html);
        let _ = writeln!(html, "var points = {};", points_json);
        let _ = writeln!(
            html,
            "L.heatLayer(points, {{minOpacity: 0.4, radius: 25, blur: 15, max: {}, gradient: {}}}).addTo(map);",
            HEATMAP_MAX_AQI,
            heat_gradient_json()
        );
        html.push_str("</script>\n</body>\n</html>\n");

        Ok(html)
    }

    pub fn write_marker_map(
        &self,
        readings: &[StationReading],
        stats: &AqiStatistics,
        path: &Path,
    ) -> Result<()> {
        let html = self.render_marker_map(readings, stats)?;
        write_html(&html, path)
    }

    pub fn write_heatmap(&self, readings: &[StationReading], path: &Path) -> Result<()> {
        let html = self.render_heatmap(readings)?;
        write_html(&html, path)
    }

    /// Configured center, else the mean of the plotted coordinates
    fn resolve_center(&self, spatial: &[&StationReading]) -> (f64, f64) {
        if let Some(center) = self.center {
            return center;
        }

        let count = spatial.len() as f64;
        let lat_sum: f64 = spatial.iter().filter_map(|r| r.latitude).sum();
        let lon_sum: f64 = spatial.iter().filter_map(|r| r.longitude).sum();
        (lat_sum / count, lon_sum / count)
    }

    fn push_head(&self, html: &mut String, title: &str, with_heat_plugin: bool) {
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>\n",
        );
        let _ = writeln!(html, "<title>{}</title>", title);
        let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{}\"/>", LEAFLET_CSS);
        let _ = writeln!(html, "<script src=\"{}\"></script>", LEAFLET_JS);
        if with_heat_plugin {
            let _ = writeln!(html, "<script src=\"{}\"></script>", LEAFLET_HEAT_JS);
        }
        html.push_str(
            r#"<style>
html, body { margin: 0; padding: 0; }
#map { width: 100%; height: 100vh; }
.panel {
  position: fixed;
  background: white;
  border: 2px solid grey;
  border-radius: 5px;
  padding: 10px;
  z-index: 9999;
  font: 12px Arial, sans-serif;
  box-shadow: 0 0 10px rgba(0,0,0,0.3);
}
.panel h4 { margin: 5px 0; color: #333; }
.panel h5 { margin: 8px 0 3px 0; color: #333; }
.panel p { margin: 3px 0; }
.panel .footnote { margin-top: 8px; font-size: 10px; color: #666; }
#stats { top: 10px; right: 10px; width: 250px; }
#legend { bottom: 20px; left: 10px; }
.popup { font-family: Arial, sans-serif; width: 200px; text-align: center; }
.popup h4 { margin: 8px 0; font-size: 16px; }
.popup p { margin: 5px 0; font-size: 13px; }
.popup .aqi-value { font-size: 20px; font-weight: bold; }
.popup .category { font-size: 12px; color: #666; }
</style>
</head>
"#,
        );
    }

    fn push_tile_layer(&self, html: &mut String) {
        let _ = writeln!(
            html,
            "L.tileLayer('{}', {{maxZoom: 18, attribution: '{}'}}).addTo(map);",
            OSM_TILE_URL, OSM_ATTRIBUTION
        );
    }

    fn push_legend(&self, html: &mut String) {
        html.push_str("<div id=\"legend\" class=\"panel\">\n<h4>AQI</h4>\n");
        for category in AqiCategory::ALL {
            let _ = writeln!(
                html,
                "<p><span style=\"color:{}\">&#9679;</span> {} ({})</p>",
                category.color(),
                category.label(),
                category.range_label()
            );
        }
        let _ = writeln!(
            html,
            "<p><span style=\"color:{}\">&#9679;</span> No data</p>",
            MISSING_AQI_COLOR
        );
        html.push_str("</div>\n");
    }

    fn push_stats_panel(&self, html: &mut String, stats: &AqiStatistics) {
        html.push_str("<div id=\"stats\" class=\"panel\">\n<h4>Air Quality Statistics</h4>\n");
        let _ = writeln!(
            html,
            "<p><b>Stations:</b> {}</p>",
            stats.total_stations
        );
        let _ = writeln!(
            html,
            "<p><b>Reporting AQI:</b> {}</p>",
            stats.stations_with_data
        );
        let _ = writeln!(html, "<p><b>Mean AQI:</b> {:.1}</p>", stats.mean_aqi);
        let _ = writeln!(
            html,
            "<p><b>Range:</b> {:.0} - {:.0}</p>",
            stats.min_aqi, stats.max_aqi
        );
        html.push_str("<h5>Category distribution</h5>\n");
        for (category, count) in &stats.category_counts {
            let _ = writeln!(
                html,
                "<p><span style=\"color:{}\">&#9679;</span> {}: {}</p>",
                category.color(),
                category.label(),
                count
            );
        }
        let _ = writeln!(
            html,
            "<p class=\"footnote\">Generated {}</p>",
            Local::now().format("%Y-%m-%d %H:%M")
        );
        html.push_str("</div>\n");
    }
}

impl Default for MapWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Gradient stops at the category breakpoints, scaled against max AQI
fn heat_gradient_json() -> String {
    let stops = [
        (50.0, AqiCategory::Good),
        (100.0, AqiCategory::Moderate),
        (150.0, AqiCategory::UnhealthyForSensitive),
        (200.0, AqiCategory::Unhealthy),
        (250.0, AqiCategory::VeryUnhealthy),
        (300.0, AqiCategory::Hazardous),
    ];

    let mut out = String::from("{");
    for (i, (breakpoint, category)) in stops.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(
            out,
            "{:.2}: '{}'",
            breakpoint / HEATMAP_MAX_AQI,
            category.color()
        );
    }
    out.push('}');
    out
}

fn write_html(html: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}
