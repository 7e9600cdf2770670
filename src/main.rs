//! # eegplot
//!
//! A command-line tool that turns a multichannel EEG/ECG CSV recording into a
//! standalone, scrollable and zoomable HTML plot.
//!
//! ## Usage
//!
//! ```bash
//! # Plot every channel at full resolution
//! eegplot --input "EEG and ECG data_02_raw.csv" --output quasar_eeg_ecg.html
//!
//! # Keep every 4th sample and show ECG in millivolts
//! eegplot -i recording.csv -o recording.html -d 4 --ecg-millivolts -v
//! ```

use clap::Parser;

mod cli;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.verbosity());

    if let Err(e) = cli::dispatch(cli) {
        report_error(&e);
        std::process::exit(1);
    }
}

fn report_error(error: &anyhow::Error) {
    #[cfg(feature = "colorized_output")]
    eprintln!("{} {:#}", console::style("error:").red().bold(), error);

    #[cfg(not(feature = "colorized_output"))]
    eprintln!("error: {:#}", error);
}
