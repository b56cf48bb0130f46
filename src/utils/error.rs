use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Profile parsing error: {0}")]
    ProfileParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a run that failed at this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SpanError {
    pub fn config(message: impl Into<String>) -> Self {
        SpanError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SpanError::IoError(_) => ErrorCategory::Io,
            SpanError::SerializationError(_) | SpanError::CsvError(_) => ErrorCategory::Output,
            SpanError::ProfileParseError(_)
            | SpanError::ConfigError { .. }
            | SpanError::MissingConfigError { .. }
            | SpanError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SpanError::IoError(e) => format!("Could not read or write a file: {}", e),
            SpanError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            SpanError::CsvError(e) => format!("Could not produce CSV output: {}", e),
            SpanError::ProfileParseError(e) => format!("The profile is not valid TOML: {}", e),
            SpanError::ConfigError { message } => format!("Configuration problem: {}", message),
            SpanError::MissingConfigError { field } => {
                format!("The field '{}' is required but was not provided", field)
            }
            SpanError::InvalidConfigValueError { field, reason, .. } => {
                format!("The field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SpanError::IoError(_) => "Check that the profile path exists and is readable",
            SpanError::SerializationError(_) | SpanError::CsvError(_) => {
                "Try the plain text output format"
            }
            SpanError::ProfileParseError(_) => {
                "Check the profile against the [profile] / [[experience]] layout"
            }
            SpanError::ConfigError { .. } | SpanError::InvalidConfigValueError { .. } => {
                "Review the command line arguments and profile values"
            }
            SpanError::MissingConfigError { .. } => "Add the missing field to the profile",
        }
    }
}

pub type Result<T> = std::result::Result<T, SpanError>;
