use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected response status {status} from {endpoint}: {body}")]
    StatusError {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl StorefrontError {
    /// True when the backend answered, but with a non-2xx status.
    pub fn is_status(&self) -> bool {
        matches!(self, StorefrontError::StatusError { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            StorefrontError::StatusError { status, .. } => Some(*status),
            StorefrontError::ApiError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StorefrontError::ApiError(_) => "Could not reach the storefront backend".to_string(),
            StorefrontError::StatusError { status, body, .. } if body.is_empty() => {
                format!("The storefront backend rejected the request ({})", status)
            }
            StorefrontError::StatusError { status, body, .. } => {
                format!("The storefront backend rejected the request ({}): {}", status, body)
            }
            StorefrontError::ConfigError { .. }
            | StorefrontError::InvalidConfigValueError { .. }
            | StorefrontError::MissingConfigError { .. } => {
                format!("Configuration problem: {}", self)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_reports_code() {
        let err = StorefrontError::StatusError {
            endpoint: "/api/cart-items".to_string(),
            status: 404,
            body: "Beverage not found".to_string(),
        };

        assert!(err.is_status());
        assert_eq!(err.status_code(), Some(404));
        assert!(err.user_friendly_message().contains("Beverage not found"));
    }

    #[test]
    fn test_config_error_message() {
        let err = StorefrontError::MissingConfigError {
            field: "api.base_url".to_string(),
        };

        assert!(!err.is_status());
        assert_eq!(err.status_code(), None);
        assert!(err.user_friendly_message().starts_with("Configuration problem"));
    }
}
