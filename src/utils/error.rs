use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP response error: {0}")]
    HttpError(#[from] http::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to bind {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程序結束碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PlatformError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlatformError::ConfigError { .. }
            | PlatformError::ConfigParseError { .. }
            | PlatformError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PlatformError::BindError { .. } => ErrorCategory::Network,
            PlatformError::HttpError(_) | PlatformError::SerializationError(_) => {
                ErrorCategory::Rendering
            }
            PlatformError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlatformError::HttpError(_) | PlatformError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            PlatformError::ConfigError { .. }
            | PlatformError::ConfigParseError { .. }
            | PlatformError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            PlatformError::BindError { .. } | PlatformError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlatformError::ConfigError { message } => format!("Configuration problem: {}", message),
            PlatformError::ConfigParseError { field, .. } => {
                format!("Could not read configuration ({})", field)
            }
            PlatformError::InvalidConfigValueError { field, value, .. } => {
                format!("Setting '{}' has an invalid value '{}'", field, value)
            }
            PlatformError::BindError { address, .. } => {
                format!("Could not listen on {}", address)
            }
            PlatformError::IoError(e) => format!("File system error: {}", e),
            PlatformError::HttpError(_) | PlatformError::SerializationError(_) => {
                "A page could not be rendered".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlatformError::ConfigError { .. } | PlatformError::ConfigParseError { .. } => {
                "Check the TOML file passed with --config (or UNIVERSO_CONFIG)"
            }
            PlatformError::InvalidConfigValueError { .. } => {
                "Fix the value on the command line, in the environment or in the config file"
            }
            PlatformError::BindError { .. } => {
                "Make sure the port is free or choose another one with --port / SERVER_PORT"
            }
            PlatformError::IoError(_) => "Check file permissions and paths",
            PlatformError::HttpError(_) | PlatformError::SerializationError(_) => {
                "Run with --verbose and report the logged error"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlatformError>;
