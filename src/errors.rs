use std::fmt;

#[derive(Debug, Clone)]
pub enum RelayError {
    ValidationError(String),
    ApiError(String),
    ParseError(String),
    ConfigError(String),
    NetworkError(String),
    Internal(String),
}

impl RelayError {
    /// Underlying failure text, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            RelayError::ValidationError(msg)
            | RelayError::ApiError(msg)
            | RelayError::ParseError(msg)
            | RelayError::ConfigError(msg)
            | RelayError::NetworkError(msg)
            | RelayError::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            RelayError::ApiError(msg) => write!(f, "API error: {}", msg),
            RelayError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            RelayError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            RelayError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            RelayError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for RelayError {}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            RelayError::NetworkError(err.to_string())
        } else if err.is_decode() {
            RelayError::ParseError(err.to_string())
        } else {
            RelayError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::ParseError(err.to_string())
    }
}
