use crate::utils::error::{ConvertError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A positional radix in `2..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Base(u32);

impl Base {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    pub const BINARY: Base = Base(2);
    pub const OCTAL: Base = Base(8);
    pub const DECIMAL: Base = Base(10);
    pub const HEXADECIMAL: Base = Base(16);

    /// Bases offered first in a picker.
    pub const COMMON: [Base; 4] = [Self::BINARY, Self::OCTAL, Self::DECIMAL, Self::HEXADECIMAL];

    pub fn new(radix: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&radix) {
            Ok(Self(radix))
        } else {
            Err(ConvertError::InvalidBase { base: radix })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_common(self) -> bool {
        Self::COMMON.contains(&self)
    }

    pub fn label(self) -> String {
        get_base_label(self.0)
    }

    pub fn all() -> impl Iterator<Item = Base> {
        (Self::MIN..=Self::MAX).map(Base)
    }
}

impl TryFrom<u32> for Base {
    type Error = ConvertError;

    fn try_from(radix: u32) -> Result<Self> {
        Self::new(radix)
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.0
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_common() {
            write!(f, "{} ({})", self.label(), self.0)
        } else {
            write!(f, "Base {}", self.0)
        }
    }
}

/// Friendly name for a radix: the four everyday bases by name, anything else as `Base <n>`.
pub fn get_base_label(base: u32) -> String {
    match base {
        2 => "Binary".to_string(),
        8 => "Octal".to_string(),
        10 => "Decimal".to_string(),
        16 => "Hexadecimal".to_string(),
        n => format!("Base {}", n),
    }
}

/// One stage of a conversion trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStep {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl ConversionStep {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            calculation: None,
            result: None,
        }
    }

    pub fn with_calculation(mut self, calculation: impl Into<String>) -> Self {
        self.calculation = Some(calculation.into());
        self
    }

    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }
}

/// Value produced by one half of a conversion together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion<T> {
    pub value: T,
    pub steps: Vec<ConversionStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub input: String,
    pub output: String,
    pub from_base: Base,
    pub to_base: Base,
    pub steps: Vec<ConversionStep>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl ConversionResult {
    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp).unwrap_or_default()
    }
}
