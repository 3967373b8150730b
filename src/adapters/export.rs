use crate::domain::model::ConversionResult;
use crate::domain::ports::ResultFormatter;
use crate::utils::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];

    pub fn formatter(self, show_steps: bool) -> Box<dyn ResultFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter { show_steps }),
            Self::Json => Box::new(JsonFormatter),
            Self::Csv => Box::new(CsvFormatter),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ConvertError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Plain-text report matching the app's share sheet.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    pub show_steps: bool,
}

impl ResultFormatter for TextFormatter {
    fn render(&self, result: &ConversionResult) -> Result<String> {
        let mut out = format!(
            "Number System Conversion\nInput: {} (Base {})\nOutput: {} (Base {})",
            result.input,
            result.from_base.get(),
            result.output,
            result.to_base.get()
        );

        if !self.show_steps || result.steps.is_empty() {
            return Ok(out);
        }

        out.push_str("\n\nStep-by-Step Conversion:\n");
        let blocks: Vec<String> = result
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let mut block = format!("{}. {}", i + 1, step.description);
                if let Some(calculation) = &step.calculation {
                    block.push_str("\n   ");
                    block.push_str(calculation);
                }
                if let Some(value) = &step.result {
                    block.push_str("\n   Result: ");
                    block.push_str(value);
                }
                block
            })
            .collect();
        out.push_str(&blocks.join("\n\n"));

        Ok(out)
    }
}

/// The persisted record shape, pretty-printed.
#[derive(Debug, Clone)]
pub struct JsonFormatter;

impl ResultFormatter for JsonFormatter {
    fn render(&self, result: &ConversionResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}

/// One CSV row per step.
#[derive(Debug, Clone)]
pub struct CsvFormatter;

impl ResultFormatter for CsvFormatter {
    fn render(&self, result: &ConversionResult) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["step", "description", "calculation", "result"])?;

        for (i, step) in result.steps.iter().enumerate() {
            let index = (i + 1).to_string();
            writer.write_record([
                index.as_str(),
                step.description.as_str(),
                step.calculation.as_deref().unwrap_or(""),
                step.result.as_deref().unwrap_or(""),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ConvertError::IoError(e.into_error()))?;
        String::from_utf8(bytes)
            .map_err(|e| ConvertError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}
