use thiserror::Error;

/// WeatherAPI.com error code for "No matching location found."
const LOCATION_NOT_FOUND_CODE: i64 = 1006;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location must not be empty")]
    Empty,
}

/// Anything that went wrong at the transport boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to send request to WeatherAPI.com ({endpoint}): {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("WeatherAPI {endpoint} request failed with status {status}: {message}")]
    Status {
        endpoint: &'static str,
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("Failed to parse WeatherAPI {endpoint} JSON: {source}")]
    InvalidBody {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn is_location_not_found(&self) -> bool {
        matches!(self, FetchError::Status { code: Some(LOCATION_NOT_FOUND_CODE), .. })
    }
}

/// The payload did not have the shape the normalizer expects.
#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("Malformed {record} data: {source}")]
    Malformed {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed {record} data: missing field `{field}`")]
    MissingField { record: &'static str, field: &'static str },

    #[error("Malformed {record} data: {field} = {value} is outside 0..=100")]
    OutOfRange { record: &'static str, field: &'static str, value: u8 },

    #[error("Malformed forecast data: timestamp {0} is out of range")]
    TimestampOutOfRange(i64),
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}

impl DashboardError {
    /// The single message shown to the user when a dashboard cannot be built.
    pub fn user_message(&self) -> String {
        format!("Error fetching weather data: {self}")
    }
}
