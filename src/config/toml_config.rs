use crate::adapters::export::OutputFormat;
use crate::domain::model::Base;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub from_base: Option<u32>,
    pub to_base: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub show_steps: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DEFAULT_FROM_BASE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn from_base(&self) -> Option<u32> {
        self.defaults.from_base
    }

    pub fn to_base(&self) -> Option<u32> {
        self.defaults.to_base
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output.format.as_deref().map(str::parse).transpose()
    }

    pub fn show_steps(&self) -> Option<bool> {
        self.output.show_steps
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base) = self.defaults.from_base {
            validate_range("defaults.from_base", base, Base::MIN, Base::MAX)?;
        }
        if let Some(base) = self.defaults.to_base {
            validate_range("defaults.to_base", base, Base::MIN, Base::MAX)?;
        }
        if let Some(format) = &self.output.format {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }
        if let Some(level) = &self.logging.level {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}
