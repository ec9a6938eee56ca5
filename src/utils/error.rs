use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] mongodb::error::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed JSON body: {message}")]
    MalformedPayload { message: String },

    #[error("{message}")]
    ValidationError { message: String },

    #[error("Username or email already exists")]
    DuplicateUser,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not Found")]
    NotFound,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, AtsError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Auth,
    Storage,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// JSON 錯誤回應格式 `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AtsError {
    pub fn validation(message: impl Into<String>) -> Self {
        AtsError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AtsError::MalformedPayload { .. }
            | AtsError::ValidationError { .. }
            | AtsError::DuplicateUser
            | AtsError::NotFound => ErrorCategory::Client,
            AtsError::InvalidCredentials => ErrorCategory::Auth,
            AtsError::DatabaseError(_) => ErrorCategory::Storage,
            AtsError::ConfigError { .. }
            | AtsError::MissingConfigError { .. }
            | AtsError::InvalidConfigValueError { .. }
            | AtsError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            AtsError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Client | ErrorCategory::Auth => ErrorSeverity::Low,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AtsError::MalformedPayload { .. }
            | AtsError::ValidationError { .. }
            | AtsError::DuplicateUser => StatusCode::BAD_REQUEST,
            AtsError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AtsError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AtsError::DatabaseError(_) => "Could not reach the user database".to_string(),
            AtsError::IoError(e) => format!("File system problem: {}", e),
            AtsError::MissingConfigError { field } => {
                format!("Required setting '{}' is not configured", field)
            }
            AtsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Client => "Check the request body and required fields",
            ErrorCategory::Auth => "Check the username and password",
            ErrorCategory::Storage => {
                "Check MONGO_URI, network access to the cluster and that the server is running"
            }
            ErrorCategory::Configuration => "Review the CLI flags, environment or TOML config file",
            ErrorCategory::System => "Check file permissions and available resources",
        }
    }
}

impl IntoResponse for AtsError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                self,
                self.category(),
                self.severity()
            );
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
