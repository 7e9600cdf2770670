//! # eegplot - Interactive Multichannel EEG/ECG Plots
//!
//! `eegplot` converts multichannel recordings exported as CSV into a single,
//! standalone HTML document with a scrollable, zoomable plot of every channel.
//!
//! ## Key Features
//!
//! - **Channel Detection**: The time column, EEG electrodes (10-20 labels),
//!   ECG/EOG leads and common-mode references are recognised from the headers;
//!   housekeeping columns (trigger, ADC status, events) are left out.
//!
//! - **Offline Viewing**: plotly.js is embedded in the output, so the document
//!   opens in any browser without a server or network access.
//!
//! - **Lossless by Default**: Plotted values equal the input values; unit
//!   conversion and downsampling are opt-in.
//!
//! - **Atomic Output**: The document is staged next to its destination and
//!   renamed into place, so a failed run never leaves a truncated file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eegplot::converter::{Converter, ConverterConfig};
//!
//! let converter = Converter::with_config(ConverterConfig::default());
//! let stats = converter.convert("EEG and ECG data_02_raw.csv", "eeg_ecg_plot.html")?;
//! println!("{}", stats);
//! # Ok::<(), eegplot::converter::ConvertError>(())
//! ```
//!
//! ## Step by Step
//!
//! ```rust,no_run
//! use eegplot::dataset::{load_csv, LoadOptions};
//! use eegplot::figure::{Figure, FigureConfig};
//! use eegplot::output::write_atomic;
//!
//! let dataset = load_csv("recording.csv", &LoadOptions::default())?;
//! let figure = Figure::build(&dataset, &FigureConfig::default().with_title("Session 02"));
//! write_atomic("recording.html", figure.to_html().as_bytes())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`dataset`]: CSV loading into a time axis plus named channels
//! - [`channels`]: Column-name classification (time, EEG, ECG, CM, housekeeping)
//! - [`figure`]: Trace construction and figure layout on plotly
//! - [`output`]: Atomic document writing
//! - [`converter`]: The end-to-end pipeline and its statistics

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod channels;
pub mod converter;
pub mod dataset;
pub mod figure;
pub mod output;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::channels::ChannelKind;
    pub use crate::converter::{ConversionStats, ConvertError, Converter, ConverterConfig};
    pub use crate::dataset::{load_csv, Channel, DataLoadError, Dataset, LoadOptions, TimeAxis};
    pub use crate::figure::{Figure, FigureConfig, TraceSummary};
    pub use crate::output::{write_atomic, WriteError};
}
