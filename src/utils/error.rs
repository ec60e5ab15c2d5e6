use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManhelperError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Translator '{program}' not found: {reason}")]
    TranslatorNotFound { program: String, reason: String },

    #[error("Translator '{program}' is not executable: {path}")]
    TranslatorNotExecutable { program: String, path: String },

    #[error("Translated output '{path}' is not valid UTF-8: {source}")]
    EncodingError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Environment,
    FileSystem,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ManhelperError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlParseError(_) => ErrorCategory::Configuration,
            Self::TranslatorNotFound { .. } | Self::TranslatorNotExecutable { .. } => {
                ErrorCategory::Environment
            }
            Self::IoError(_) => ErrorCategory::FileSystem,
            Self::EncodingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::FileSystem => ErrorSeverity::High,
            ErrorCategory::Environment => ErrorSeverity::Critical,
        }
    }

    /// 內部錯誤對應的退出碼；126/127 沿用 shell 的慣例
    pub fn exit_code(&self) -> i32 {
        if let Self::TranslatorNotExecutable { .. } = self {
            return 126;
        }
        match self.category() {
            ErrorCategory::Environment => 127,
            ErrorCategory::Configuration => 2,
            ErrorCategory::FileSystem | ErrorCategory::Data => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("File operation failed: {}", e),
            Self::TomlParseError(_) => "The configuration file is not valid TOML".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::TranslatorNotFound { program, .. } => {
                format!("Cannot run translator '{}'", program)
            }
            Self::TranslatorNotExecutable { program, path } => {
                format!("Translator '{}' at {} is not executable", program, path)
            }
            Self::EncodingError { path, .. } => {
                format!("Translated page '{}' contains invalid UTF-8", path)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the paths exist and are readable/writable",
            Self::TomlParseError(_) => "Fix the syntax of the file passed with --config",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the command line flags and the [translator] table of the config file"
            }
            Self::TranslatorNotFound { .. } => {
                "Install po4a or point --translator at the translation executable"
            }
            Self::TranslatorNotExecutable { .. } => {
                "Check the file permissions of the translator (chmod +x)"
            }
            Self::EncodingError { .. } => "Make sure the translation catalog is saved as UTF-8",
        }
    }
}

pub type Result<T> = std::result::Result<T, ManhelperError>;
