use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Speech recognition error: {reason}")]
    RecognitionError { reason: String },

    #[error("Speech recognition is not supported")]
    RecognitionUnsupported,

    #[error("Unknown product id: {id}")]
    UnknownProduct { id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Capture,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AssistantError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AssistantError::IoError(_) => ErrorCategory::System,
            AssistantError::InvalidConfigValueError { .. }
            | AssistantError::MissingConfigError { .. }
            | AssistantError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            AssistantError::RecognitionError { .. } | AssistantError::RecognitionUnsupported => {
                ErrorCategory::Capture
            }
            AssistantError::UnknownProduct { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AssistantError::UnknownProduct { .. } => ErrorSeverity::Low,
            AssistantError::RecognitionError { .. } | AssistantError::RecognitionUnsupported => {
                ErrorSeverity::Medium
            }
            AssistantError::InvalidConfigValueError { .. }
            | AssistantError::MissingConfigError { .. }
            | AssistantError::ConfigValidationError { .. } => ErrorSeverity::High,
            AssistantError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the store file: every product needs a unique id, a positive price and lowercase keywords"
            }
            ErrorCategory::Input => "Use /products to list valid product ids",
            ErrorCategory::Capture => "Type the command instead, or try the microphone again",
            ErrorCategory::System => "Check file permissions and that the path exists",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AssistantError::IoError(e) => format!("Could not read a file: {}", e),
            AssistantError::ConfigValidationError { message, .. } => {
                format!("The store file could not be used: {}", message)
            }
            AssistantError::InvalidConfigValueError { field, reason, .. } => {
                format!("Store setting '{}' is invalid: {}", field, reason)
            }
            AssistantError::MissingConfigError { field } => {
                format!("Store setting '{}' is required", field)
            }
            AssistantError::RecognitionUnsupported => {
                "Speech recognition isn't supported on this device.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
