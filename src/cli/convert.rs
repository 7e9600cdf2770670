use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use eegplot::converter::{Converter, ConverterConfig};
use eegplot::dataset::LoadOptions;
use eegplot::figure::FigureConfig;

use super::Config;

/// Arguments of a conversion run, after CLI parsing
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub downsample: Option<usize>,
    pub time_column: Option<String>,
    pub title: Option<String>,
    pub ecg_millivolts: bool,
    pub config: Config,
}

/// Merge CLI flags over config file values over defaults
fn converter_config(args: &ConvertArgs) -> Result<ConverterConfig> {
    let plot = &args.config.plot;

    let mut load = LoadOptions::default();
    if let Some(delimiter) = plot.delimiter_byte()? {
        load = load.with_delimiter(delimiter);
    }
    if let Some(name) = args.time_column.as_ref().or(plot.time_column.as_ref()) {
        load = load.with_time_column(name.clone());
    }

    let mut figure = FigureConfig::default()
        .with_ecg_millivolts(args.ecg_millivolts || plot.ecg_millivolts.unwrap_or(false));
    if let Some(title) = args.title.as_ref().or(plot.title.as_ref()) {
        figure = figure.with_title(title.clone());
    }
    if let Some(height) = plot.height {
        figure = figure.with_height(height);
    }

    Ok(ConverterConfig {
        load,
        figure,
        downsample: args.downsample.or(plot.downsample),
    })
}

/// Convert a CSV recording to an interactive HTML plot
pub fn run(args: ConvertArgs) -> Result<()> {
    let config = converter_config(&args)?;

    info!("eegplot - CSV to interactive HTML");
    info!("=================================");
    info!("Input:  {}", args.input.display());
    info!("Output: {}", args.output.display());
    if let Some(factor) = config.downsample {
        info!("Downsample factor: {}", factor);
    }

    let converter = Converter::with_config(config);
    let stats = converter
        .convert(&args.input, &args.output)
        .with_context(|| format!("Conversion of {} failed", args.input.display()))?;

    for column in &stats.skipped_columns {
        warn!("  Skipped non-numeric column: {}", column);
    }
    if stats.housekeeping_channels > 0 {
        info!(
            "  {} housekeeping trace(s) hidden; click them in the legend to show",
            stats.housekeeping_channels
        );
    }

    info!("{}", stats);
    info!(
        "  Output file size: {} bytes ({:.2} MB)",
        stats.output_bytes,
        stats.output_bytes as f64 / 1024.0 / 1024.0
    );

    #[cfg(feature = "colorized_output")]
    println!(
        "{} {}",
        console::style("Interactive plot saved to").green(),
        console::style(args.output.display()).bold()
    );

    #[cfg(not(feature = "colorized_output"))]
    println!("Interactive plot saved to {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(config: Config) -> ConvertArgs {
        ConvertArgs {
            input: PathBuf::from("in.csv"),
            output: PathBuf::from("out.html"),
            downsample: None,
            time_column: None,
            title: None,
            ecg_millivolts: false,
            config,
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let config = converter_config(&args(Config::default())).unwrap();
        assert_eq!(config.downsample, None);
        assert_eq!(config.load.delimiter, b',');
        assert_eq!(config.figure, FigureConfig::default());
    }

    #[test]
    fn test_config_file_values_apply() {
        let file = Config::from_str(
            "[plot]\ntitle = \"From file\"\nheight = 500\ndownsample = 3\ntime_column = \"Clock\"\n",
        )
        .unwrap();
        let config = converter_config(&args(file)).unwrap();

        assert_eq!(config.downsample, Some(3));
        assert_eq!(config.load.time_column.as_deref(), Some("Clock"));
        assert_eq!(config.figure.title, "From file");
        assert_eq!(config.figure.height, 500);
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let file = Config::from_str("[plot]\ntitle = \"From file\"\ndownsample = 3\n").unwrap();
        let mut cli = args(file);
        cli.title = Some("From flag".to_string());
        cli.downsample = Some(8);
        cli.ecg_millivolts = true;

        let config = converter_config(&cli).unwrap();
        assert_eq!(config.downsample, Some(8));
        assert_eq!(config.figure.title, "From flag");
        assert!(config.figure.ecg_millivolts);
    }
}
