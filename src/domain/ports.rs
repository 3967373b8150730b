use crate::domain::model::ConversionResult;
use crate::utils::error::Result;

/// Renders a finished conversion for display or export.
pub trait ResultFormatter: Send + Sync {
    fn render(&self, result: &ConversionResult) -> Result<String>;
}
