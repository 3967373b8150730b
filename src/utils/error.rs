use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid number for base {base}: '{input}'")]
    InvalidInput { input: String, base: u32 },

    #[error("Base must be between 2 and 36, got {base}")]
    InvalidBase { base: u32 },

    #[error("Value of '{input}' in base {base} does not fit in 64 bits")]
    Overflow { input: String, base: u32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InvalidBase { .. } | Self::Overflow { .. } => {
                ErrorCategory::Input
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => ErrorCategory::Config,
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { input, base } if input.trim().is_empty() => {
                format!("Please enter a number to convert from base {}", base)
            }
            Self::InvalidInput { input, base } => {
                format!("'{}' is not a valid base {} number", input, base)
            }
            Self::InvalidBase { base } => {
                format!("Base {} is not supported", base)
            }
            Self::Overflow { input, .. } => {
                format!("'{}' is too large to convert", input)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Could not export the conversion".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidInput { base, .. } => format!(
                "Use only the digits {} (letters are case-insensitive)",
                valid_digit_range(*base)
            ),
            Self::InvalidBase { .. } => "Pick a base from 2 to 36".to_string(),
            Self::Overflow { .. } => {
                "Split the number or use a shorter input; values are limited to 64 bits".to_string()
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the TOML settings file and command-line flags".to_string()
            }
            Self::IoError(_) => "Check that the path exists and is readable".to_string(),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try a different --format".to_string()
            }
        }
    }
}

fn valid_digit_range(base: u32) -> String {
    let symbols = crate::core::alphabet::valid_symbols(base);
    match (symbols.first(), symbols.last()) {
        (Some(first), Some(last)) if first != last => {
            format!("{}-{}", *first as char, *last as char)
        }
        (Some(only), _) => (*only as char).to_string(),
        _ => "(none)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
