use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Encoding error: input is not valid UTF-8 ({0})")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed record on line {line_number}: {reason} (got {fields} fields)")]
    MalformedRecordError {
        line_number: usize,
        fields: usize,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Data,
}

impl MenuError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::IoError(_) => ErrorCategory::Io,
            MenuError::ConfigError { .. } | MenuError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            MenuError::EncodingError(_)
            | MenuError::MalformedRecordError { .. }
            | MenuError::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", e),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", e),
                _ => format!("File operation failed: {}", e),
            },
            MenuError::MalformedRecordError {
                line_number, reason, ..
            } => format!("Menu line {} could not be parsed: {}", line_number, reason),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that menu.csv exists and the working directory is writable",
            ErrorCategory::Configuration => "Check the configuration file and command line flags",
            ErrorCategory::Data => {
                "Check the menu file: one item per line as course,title,description,price"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
