//! Chromaramp command-line entry point.

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use chromaramp_core::{normalize, ColorError, ColorReport, ConfigError, PaletteConfig};
use clap::Parser;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(version, about = "Inspect colors: conversions, complement, contrast and shades")]
struct Cli {
    /// Colors as hex (`#ff4757`, `ff4757` or `f47`)
    #[arg(required = true)]
    colors: Vec<String>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shade steps on each side of the base color
    #[arg(long)]
    steps: Option<u8>,

    /// Lightness percentage between shade steps
    #[arg(long)]
    step: Option<u8>,

    /// Fail on invalid colors instead of using the fallback
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn build_config(cli: &Cli) -> Result<PaletteConfig, CliError> {
    let mut config = PaletteConfig::load_or_default(cli.config.as_deref())?;
    if let Some(steps) = cli.steps {
        config.shades.steps_per_side = steps;
    }
    if let Some(step) = cli.step {
        config.shades.step_percent = step;
    }
    config.validate()?;
    Ok(config)
}

fn reports(cli: &Cli, config: &PaletteConfig) -> Result<Vec<ColorReport>, CliError> {
    cli.colors
        .iter()
        .map(|input| {
            if cli.strict {
                let hex = normalize(input).ok_or_else(|| ColorError::InvalidHex(input.clone()))?;
                Ok(ColorReport::new(&hex, &config.shades))
            } else {
                Ok(ColorReport::from_input_or_fallback(input, config).0)
            }
        })
        .collect()
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let config = build_config(cli)?;
    let reports = reports(cli, &config)?;

    if cli.json {
        Ok(serde_json::to_string_pretty(&reports)?)
    } else {
        Ok(reports
            .iter()
            .map(output::render_text)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("Arguments: {:?}", cli);

    match run(&cli) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("chromaramp: {}", e);
            ExitCode::FAILURE
        }
    }
}
