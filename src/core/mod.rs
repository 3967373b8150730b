pub mod alphabet;
pub mod clock;
pub mod converter;
pub mod from_decimal;
pub mod to_decimal;
pub mod validator;

pub use crate::domain::model::{Base, Conversion, ConversionResult, ConversionStep};
pub use crate::domain::ports::ResultFormatter;
pub use crate::utils::error::Result;
