use thiserror::Error;

#[derive(Error, Debug)]
pub enum HafragError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Section '{section}': {first} and {second} are mutually exclusive")]
    ConflictError {
        section: String,
        first: &'static str,
        second: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Conflict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HafragError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HafragError::IoError(_) => ErrorCategory::Io,
            HafragError::SerializationError(_) => ErrorCategory::Serialization,
            HafragError::ConflictError { .. } => ErrorCategory::Conflict,
            _ => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Conflict => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HafragError::IoError(_) => {
                "Check file permissions and that the output directory is writable".to_string()
            }
            HafragError::SerializationError(_) => {
                "Check that registry entries are well-formed JSON".to_string()
            }
            HafragError::ConfigError { .. } | HafragError::ConfigValidationError { .. } => {
                "Review the configuration file against the documented schema".to_string()
            }
            HafragError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the configuration file", field)
            }
            HafragError::MissingConfigError { field } => {
                format!("Add the required field '{}' to the configuration file", field)
            }
            HafragError::ConflictError { first, second, .. } => {
                format!("Remove either '{}' or '{}' from the section", first, second)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HafragError::IoError(e) => format!("A file operation failed: {}", e),
            HafragError::SerializationError(e) => {
                format!("A registry entry could not be parsed: {}", e)
            }
            HafragError::ConflictError {
                section,
                first,
                second,
            } => format!(
                "Section '{}' sets both '{}' and '{}', which cannot be combined",
                section, first, second
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HafragError>;
