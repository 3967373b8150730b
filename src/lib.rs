pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Settings};

pub use adapters::export::OutputFormat;
pub use config::TomlConfig;
pub use crate::core::converter::{convert, convert_back, convert_between};
pub use crate::core::from_decimal::convert_from_decimal;
pub use crate::core::to_decimal::convert_to_decimal;
pub use crate::core::validator::is_valid_number;
pub use domain::model::{get_base_label, Base, Conversion, ConversionResult, ConversionStep};
pub use domain::ports::ResultFormatter;
pub use utils::error::{ConvertError, Result};
