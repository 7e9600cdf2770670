use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod convert;

pub use config::Config;

/// eegplot - Scrollable multichannel EEG + ECG plotter
#[derive(Parser, Debug)]
#[command(name = "eegplot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Input CSV file path
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output HTML file path
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,

    /// Keep every N-th row (1 = full data)
    #[arg(short, long, value_name = "N")]
    downsample: Option<usize>,

    /// Column to use as the time axis (detected from the headers when omitted)
    #[arg(long, value_name = "NAME")]
    time_column: Option<String>,

    /// Figure title
    #[arg(long)]
    title: Option<String>,

    /// Plot ECG and common-mode channels in mV instead of µV
    #[arg(long)]
    ecg_millivolts: bool,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    convert::run(convert::ConvertArgs {
        input: cli.input,
        output: cli.output,
        downsample: cli.downsample,
        time_column: cli.time_column,
        title: cli.title,
        ecg_millivolts: cli.ecg_millivolts,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_flags() {
        let cli = Cli::try_parse_from(["eegplot", "--input", "in.csv", "--output", "out.html"])
            .unwrap();
        assert_eq!(cli.input, PathBuf::from("in.csv"));
        assert_eq!(cli.output, PathBuf::from("out.html"));
        assert_eq!(cli.verbosity(), 0);
        assert!(!cli.ecg_millivolts);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from([
            "eegplot", "-i", "in.csv", "-o", "out.html", "-d", "4", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.downsample, Some(4));
        assert_eq!(cli.verbosity(), 2);
    }

    #[test]
    fn test_output_is_required() {
        assert!(Cli::try_parse_from(["eegplot", "--input", "in.csv"]).is_err());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["eegplot", "--output", "out.html"]).is_err());
    }
}
