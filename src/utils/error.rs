use crate::core::form::FormIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{message}")]
    ApiError { status: u16, message: String },

    #[error("{0}")]
    Validation(#[from] FormIssue),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Input,
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

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            // 伺服器有回應，只是內容不符合預期的格式
            CatalogError::HttpError(e) if e.is_decode() => ErrorCategory::Api,
            CatalogError::HttpError(_) => ErrorCategory::Network,
            CatalogError::ApiError { .. } => ErrorCategory::Api,
            CatalogError::Validation(_) => ErrorCategory::Input,
            CatalogError::UrlError(_)
            | CatalogError::ConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::CsvError(_)
            | CatalogError::IoError(_)
            | CatalogError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 表單被擋下，使用者修正後重送即可
            CatalogError::Validation(_) => ErrorSeverity::Low,
            CatalogError::HttpError(e) if e.is_decode() => ErrorSeverity::High,
            CatalogError::HttpError(_) => ErrorSeverity::Medium,
            CatalogError::ApiError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            CatalogError::ApiError { .. } => ErrorSeverity::High,
            CatalogError::UrlError(_)
            | CatalogError::ConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorSeverity::High,
            CatalogError::CsvError(_)
            | CatalogError::IoError(_)
            | CatalogError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::HttpError(e) if e.is_timeout() => {
                "The catalog API did not answer in time".to_string()
            }
            CatalogError::HttpError(e) if e.is_connect() => {
                "Could not connect to the catalog API".to_string()
            }
            CatalogError::HttpError(e) if e.is_decode() => {
                "The catalog API answered with an unexpected response format".to_string()
            }
            CatalogError::HttpError(_) => "Request to the catalog API failed".to_string(),
            CatalogError::ApiError { message, .. } => message.clone(),
            CatalogError::Validation(issue) => issue.to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        if matches!(self, CatalogError::HttpError(e) if e.is_decode()) {
            return "Check that --base-url points to the catalog API and not another service";
        }
        match self.category() {
            ErrorCategory::Network => "Check that the API is running and that --base-url points to it",
            ErrorCategory::Api => "Review the submitted values and try again",
            ErrorCategory::Input => "Fix the highlighted field and submit again",
            ErrorCategory::Configuration => "Check the configuration file and command-line flags",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
