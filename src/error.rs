use thiserror::Error;

/// Error type shared by the collaborators around the scheduler
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} API error (HTTP {status}): {message}")]
    Api {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("Failed to decode {service} response at {path}: {message}")]
    Decode {
        service: &'static str,
        path: String,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Rate limit exceeded: retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Rejected generated itinerary: {0}")]
    Rejected(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Decode a JSON body, keeping the path of the field that failed
    pub fn decode<T: serde::de::DeserializeOwned>(service: &'static str, body: &str) -> Result<T> {
        let mut deserializer = serde_json::Deserializer::from_str(body);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| PlannerError::Decode {
            service,
            path: err.path().to_string(),
            message: err.inner().to_string(),
        })
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            PlannerError::Http(err) => err.is_timeout() || err.is_connect(),
            PlannerError::Api { status, .. } => *status >= 500,
            PlannerError::RateLimit { .. } => true,
            PlannerError::Timeout(_) => true,
            _ => false,
        }
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Http(_) => "HTTP_ERROR",
            PlannerError::Api { .. } => "API_ERROR",
            PlannerError::Decode { .. } => "DECODE_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::RateLimit { .. } => "RATE_LIMIT_ERROR",
            PlannerError::Timeout(_) => "TIMEOUT_ERROR",
            PlannerError::Rejected(_) => "REJECTED_OUTPUT",
            PlannerError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "retryable": self.is_retryable()
            }
        })
    }
}
