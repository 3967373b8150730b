use anyhow::Context;
use clap::Parser;
use radix_trace::utils::logger;
use radix_trace::{convert, convert_back, Base, CliConfig, ConvertError, Settings};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let file = match config.load_file() {
        Ok(file) => file,
        Err(e) => exit_with(&e),
    };

    let level = file.as_ref().and_then(|f| f.log_level());
    if config.log_json {
        logger::init_json_logger(config.verbose, level);
    } else {
        logger::init_cli_logger(config.verbose, level);
    }

    tracing::info!("Starting radix-trace");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.list_bases {
        let mut stdout = std::io::stdout().lock();
        for base in Base::all() {
            writeln!(stdout, "{:>2}  {}", base.get(), base.label())
                .context("failed to write base list")?;
        }
        return Ok(());
    }

    let settings = match config.resolve(file.as_ref()) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    match run(&config, &settings) {
        Ok(report) => {
            writeln!(std::io::stdout().lock(), "{}", report).context("failed to write report")?;
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn run(config: &CliConfig, settings: &Settings) -> radix_trace::Result<String> {
    let input = config.input.as_deref().unwrap_or_default();
    let formatter = settings.format.formatter(settings.show_steps);

    let result = convert(input, settings.from_base, settings.to_base)?;
    tracing::info!(
        "Converted {} (base {}) to {} (base {}) at {}",
        result.input,
        settings.from_base,
        result.output,
        settings.to_base,
        result.created_at().to_rfc3339()
    );
    let mut report = formatter.render(&result)?;

    if config.round_trip {
        let back = convert_back(&result)?;
        if back.output != result.input {
            tracing::debug!(
                "Round trip normalized '{}' to '{}'",
                result.input,
                back.output
            );
        }
        report.push_str("\n\n");
        report.push_str(&formatter.render(&back)?);
    }

    Ok(report)
}

fn exit_with(e: &ConvertError) -> ! {
    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code())
}
