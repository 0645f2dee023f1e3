use std::time::Duration;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::{AqiError, Result};
use crate::models::StationReading;
use crate::utils::constants::{
    API_BASE_URL, API_KEY_ENV_VAR, AQI_DATASET_ID, REQUEST_TIMEOUT_SECS,
};

/// Client for the MOENV `aqx_p_432` real-time AQI dataset.
///
/// Performs exactly one authenticated GET per fetch. No retries, no
/// pagination: the endpoint returns all stations in a single page.
pub struct AqiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AqiClient {
    /// Create a client from the `MOENV_API_KEY` environment variable.
    ///
    /// Fails before any network activity when the key is absent or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(AqiError::MissingApiKey)?;
        Self::new(api_key)
    }

    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the current readings for all stations, sorted by county
    /// and site name.
    pub async fn fetch_readings(&self, limit: Option<u32>) -> Result<Vec<StationReading>> {
        let url = format!("{}/{}", self.base_url, AQI_DATASET_ID);
        tracing::debug!(%url, ?limit, "requesting AQI dataset");

        let mut request = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("format", "JSON")]);

        if let Some(limit) = limit {
            request = request.query(&[("limit", limit.to_string())]);
        }

        let body = request.send().await?.error_for_status()?.text().await?;
        let readings = parse_response(&body)?;
        tracing::debug!(count = readings.len(), "parsed station readings");
        Ok(readings)
    }
}

/// The API has served both a bare record array and an object wrapping
/// the array in a `records` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiResponse {
    Wrapped { records: Vec<RawReading> },
    Bare(Vec<RawReading>),
}

impl ApiResponse {
    fn into_records(self) -> Vec<RawReading> {
        match self {
            ApiResponse::Wrapped { records } => records,
            ApiResponse::Bare(records) => records,
        }
    }
}

/// One record as served by the API: every field is a string.
#[derive(Debug, Deserialize)]
struct RawReading {
    #[serde(rename = "siteid", default)]
    site_id: String,
    #[serde(rename = "sitename", default)]
    site_name: String,
    #[serde(default)]
    county: String,
    #[serde(default)]
    aqi: String,
    #[serde(rename = "pm2.5", default)]
    pm25: String,
    #[serde(default)]
    pm10: String,
    #[serde(default)]
    o3: String,
    #[serde(default)]
    co: String,
    #[serde(default)]
    no2: String,
    #[serde(default)]
    so2: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    pollutant: String,
    #[serde(default)]
    latitude: String,
    #[serde(default)]
    longitude: String,
    #[serde(rename = "publishtime", default)]
    publish_time: String,
    #[serde(rename = "wind_speed", default)]
    wind_speed: String,
    #[serde(rename = "wind_direc", default)]
    wind_direction: String,
}

impl RawReading {
    fn into_reading(self) -> StationReading {
        StationReading {
            site_id: self.site_id,
            site_name: self.site_name,
            county: self.county,
            aqi: parse_numeric(&self.aqi),
            pm25: parse_numeric(&self.pm25),
            pm10: parse_numeric(&self.pm10),
            o3: parse_numeric(&self.o3),
            co: parse_numeric(&self.co),
            no2: parse_numeric(&self.no2),
            so2: parse_numeric(&self.so2),
            status: self.status,
            pollutant: self.pollutant,
            latitude: parse_numeric(&self.latitude),
            longitude: parse_numeric(&self.longitude),
            publish_time: parse_publish_time(&self.publish_time),
            wind_speed: parse_numeric(&self.wind_speed),
            wind_direction: parse_numeric(&self.wind_direction),
        }
    }
}

/// Parse a JSON response body into readings sorted by (county, site name).
///
/// An empty record set is an error: downstream consumers must never
/// produce a partial map from nothing.
pub fn parse_response(body: &str) -> Result<Vec<StationReading>> {
    let response: ApiResponse = serde_json::from_str(body)?;

    let mut readings: Vec<StationReading> = response
        .into_records()
        .into_iter()
        .map(RawReading::into_reading)
        .collect();

    if readings.is_empty() {
        return Err(AqiError::EmptyResponse);
    }

    readings.sort_by(|a, b| (&a.county, &a.site_name).cmp(&(&b.county, &b.site_name)));
    Ok(readings)
}

/// The feed reports missing numerics as "", "-", or junk text
fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn parse_publish_time(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y/%m/%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
        .ok()
}
