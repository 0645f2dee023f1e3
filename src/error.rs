use thiserror::Error;

pub type Result<T> = std::result::Result<T, AqiError>;

#[derive(Error, Debug)]
pub enum AqiError {
    #[error("MOENV_API_KEY not found in environment variables")]
    MissingApiKey,

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API returned no records")]
    EmptyResponse,

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
