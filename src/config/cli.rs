use crate::adapters::export::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "radix-trace.toml";
pub const DEFAULT_FROM_BASE: u32 = 10;
pub const DEFAULT_TO_BASE: u32 = 2;

#[derive(Debug, Clone, Parser)]
#[command(name = "radix-trace")]
#[command(about = "Convert numbers between bases 2-36 and show every step")]
pub struct CliConfig {
    /// Number to convert (digits 0-9 and letters A-Z, case-insensitive)
    #[arg(required_unless_present = "list_bases")]
    pub input: Option<String>,

    /// Source base
    #[arg(short = 'f', long = "from")]
    pub from_base: Option<u32>,

    /// Target base
    #[arg(short = 't', long = "to")]
    pub to_base: Option<u32>,

    /// Path to TOML settings file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Output format: text, json or csv
    #[arg(long)]
    pub format: Option<String>,

    /// Print only the result, without the step-by-step trace
    #[arg(long)]
    pub no_steps: bool,

    /// Exchange source and target base before converting
    #[arg(long)]
    pub swap: bool,

    /// Also convert the output back to the source base
    #[arg(long)]
    pub round_trip: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// List every supported base and exit
    #[arg(long)]
    pub list_bases: bool,
}

/// Effective settings after merging flags, the settings file and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub from_base: u32,
    pub to_base: u32,
    pub format: OutputFormat,
    pub show_steps: bool,
}

impl CliConfig {
    /// Loads the settings file. A missing file is only an error when a path other
    /// than the default was requested.
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        let path = Path::new(&self.config);
        if !path.exists() {
            if self.config == DEFAULT_CONFIG_PATH {
                return Ok(None);
            }
            return Err(ConvertError::ConfigError {
                message: format!("settings file '{}' not found", self.config),
            });
        }

        let file = TomlConfig::from_file(path)?;
        file.validate()?;
        Ok(Some(file))
    }

    pub fn resolve(&self, file: Option<&TomlConfig>) -> Result<Settings> {
        let mut from_base = self
            .from_base
            .or_else(|| file.and_then(TomlConfig::from_base))
            .unwrap_or(DEFAULT_FROM_BASE);
        let mut to_base = self
            .to_base
            .or_else(|| file.and_then(TomlConfig::to_base))
            .unwrap_or(DEFAULT_TO_BASE);

        if self.swap {
            std::mem::swap(&mut from_base, &mut to_base);
        }

        let format = match &self.format {
            Some(name) => name.parse()?,
            None => match file {
                Some(file) => file.output_format()?.unwrap_or_default(),
                None => OutputFormat::default(),
            },
        };

        let show_steps = !self.no_steps && file.and_then(TomlConfig::show_steps).unwrap_or(true);

        Ok(Settings {
            from_base,
            to_base,
            format,
            show_steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("radix-trace").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_builtin_defaults() {
        let cli = parse(&["42"]);
        let settings = cli.resolve(None).unwrap();
        assert_eq!(settings.from_base, 10);
        assert_eq!(settings.to_base, 2);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.show_steps);
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            "[defaults]\nfrom_base = 8\nto_base = 16\n[output]\nformat = \"csv\"\n",
        )
        .unwrap();

        let cli = parse(&["17", "--to", "2", "--format", "json"]);
        let settings = cli.resolve(Some(&file)).unwrap();
        assert_eq!(settings.from_base, 8);
        assert_eq!(settings.to_base, 2);
        assert_eq!(settings.format, OutputFormat::Json);

        let cli = parse(&["17"]);
        let settings = cli.resolve(Some(&file)).unwrap();
        assert_eq!(settings.format, OutputFormat::Csv);
    }

    #[test]
    fn test_swap_and_no_steps() {
        let cli = parse(&["FF", "-f", "16", "-t", "10", "--swap", "--no-steps"]);
        let settings = cli.resolve(None).unwrap();
        assert_eq!(settings.from_base, 10);
        assert_eq!(settings.to_base, 16);
        assert!(!settings.show_steps);
    }

    #[test]
    fn test_unknown_format_flag() {
        let cli = parse(&["1", "--format", "yaml"]);
        assert!(cli.resolve(None).is_err());
    }

    #[test]
    fn test_input_optional_only_when_listing() {
        assert!(CliConfig::try_parse_from(["radix-trace"]).is_err());
        assert!(CliConfig::try_parse_from(["radix-trace", "--list-bases"]).is_ok());
    }

    #[test]
    fn test_missing_default_file_is_ignored() {
        let cli = parse(&["1", "--config", DEFAULT_CONFIG_PATH]);
        if !Path::new(DEFAULT_CONFIG_PATH).exists() {
            assert!(cli.load_file().unwrap().is_none());
        }

        let cli = parse(&["1", "--config", "definitely/not/here.toml"]);
        assert!(cli.load_file().is_err());
    }
}
