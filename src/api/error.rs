use thiserror::Error;

/// Failure of a single API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-2xx response; `message` is the best human-readable text found
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 2xx response whose body still carried an `error` field
    #[error("{0}")]
    Rejected(String),
    /// Body did not match the expected record shape
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
