//! Error types for the MedTrack CLI

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for MedTrack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Whether the failure was already published as an error notification.
    ///
    /// The shell renders published failures as toasts, so it skips printing
    /// them a second time. Auth failures only publish a session signal and
    /// still print their message.
    pub fn is_published(&self) -> bool {
        matches!(
            self,
            Error::Api(ApiError::Request { .. } | ApiError::Network(_))
        )
    }
}

/// API-related errors, classified by the response interceptor
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401/403: the credential is missing, invalid or expired
    #[error("{message}")]
    AuthFailure { status: StatusCode, message: String },

    /// Any other non-2xx response
    #[error("{message}")]
    Request { status: StatusCode, message: String },

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::AuthFailure { status, .. } | ApiError::Request { status, .. } => {
                Some(*status)
            }
            ApiError::Network(_) | ApiError::InvalidResponse(_) => None,
        }
    }

    /// Whether this is an authentication failure (401 or 403).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::AuthFailure { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration and local storage errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Credential storage error: {0}")]
    Storage(String),

    #[error("Please sign in to continue. Run `medtrack login <EMAIL>`.")]
    NotSignedIn,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Client-side form validation errors; these never reach the network
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required.")]
    EmailRequired,

    #[error("Password is required.")]
    PasswordRequired,

    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,

    #[error("New password must be at least 6 characters.")]
    NewPasswordTooShort,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Name is required.")]
    NameRequired,

    #[error("Expiry date is required.")]
    ExpiryRequired,

    #[error("Expiry date must be in YYYY-MM-DD format.")]
    InvalidExpiry,

    #[error("Dates must be in YYYY-MM-DD format.")]
    InvalidDate,

    #[error("Quantity must be a positive number.")]
    InvalidQuantity,

    #[error("Time is required.")]
    TimeRequired,

    #[error("Use HH:mm:ss (e.g., 08:00:00).")]
    InvalidTimeOfDay,

    #[error("Nothing to update. Pass at least one field.")]
    EmptyUpdate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_displays_server_message() {
        let err = ApiError::AuthFailure {
            status: StatusCode::UNAUTHORIZED,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_auth_failure());
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_request_error_is_not_auth_failure() {
        let err = ApiError::Request {
            status: StatusCode::BAD_REQUEST,
            message: "Quantity is invalid".to_string(),
        };
        assert!(!err.is_auth_failure());
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = ApiError::Network("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_invalid_response_is_not_published() {
        let err: Error = ApiError::InvalidResponse("Missing field 'id'".to_string()).into();
        assert!(err.to_string().contains("Missing field"));
        assert!(!err.is_published());
    }

    #[test]
    fn test_other_failures_are_published() {
        let err: Error = ApiError::Network("net fail".to_string()).into();
        assert!(err.is_published());

        let err: Error = ApiError::Request {
            status: StatusCode::CONFLICT,
            message: "Duplicate".to_string(),
        }
        .into();
        assert!(err.is_published());
    }

    #[test]
    fn test_auth_failure_still_prints() {
        let err: Error = ApiError::AuthFailure {
            status: StatusCode::FORBIDDEN,
            message: "Forbidden".to_string(),
        }
        .into();
        assert!(!err.is_published());
    }

    #[test]
    fn test_not_signed_in_message() {
        let err = ConfigError::NotSignedIn;
        assert!(err.to_string().contains("sign in to continue"));
        assert!(err.to_string().contains("medtrack login"));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters."
        );
        assert_eq!(
            ValidationError::InvalidQuantity.to_string(),
            "Quantity must be a positive number."
        );
    }

    #[test]
    fn test_error_from_validation_error() {
        let err: Error = ValidationError::NameRequired.into();

        match err {
            Error::Validation(ValidationError::NameRequired) => (),
            _ => panic!("Expected Error::Validation(ValidationError::NameRequired)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
