// Adapters layer: concrete renderings of conversion results for the outside world.

pub mod export;

pub use export::{CsvFormatter, JsonFormatter, OutputFormat, TextFormatter};
