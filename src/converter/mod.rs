//! CSV to interactive HTML converter
//!
//! This module provides the single-shot pipeline
//! load → classify → build traces → assemble figure → write document.
//! Every step completes before the next begins; any failure aborts the run.

use std::fmt;
use std::path::Path;

use log::info;

use crate::channels::ChannelKind;
use crate::dataset::{load_csv, DataLoadError, Dataset, LoadOptions};
use crate::figure::{Figure, FigureConfig};
use crate::output::{write_atomic, WriteError};


/// Errors that can occur during conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Error loading the input CSV
    #[error("Data load error: {0}")]
    Load(#[from] DataLoadError),

    /// Error writing the output document
    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Configuration for the CSV to HTML conversion
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    /// How the input is parsed
    pub load: LoadOptions,

    /// How the figure is presented
    pub figure: FigureConfig,

    /// Keep every N-th row (1 = full data). 0 is rejected.
    pub downsample: Option<usize>,
}

impl ConverterConfig {
    /// Check value ranges before any file is touched
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.downsample == Some(0) {
            return Err(ConvertError::InvalidConfig(
                "downsample factor must be at least 1".to_string(),
            ));
        }
        if self.figure.height == 0 {
            return Err(ConvertError::InvalidConfig(
                "figure height must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    fn downsample_factor(&self) -> usize {
        self.downsample.unwrap_or(1)
    }
}

/// Statistics from a conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Data rows read from the input
    pub rows_read: usize,
    /// Points per trace after downsampling
    pub rows_plotted: usize,
    /// Number of EEG traces
    pub eeg_channels: usize,
    /// Number of ECG traces
    pub ecg_channels: usize,
    /// Number of common-mode traces
    pub cm_channels: usize,
    /// Number of unlabelled traces plotted next to EEG
    pub other_channels: usize,
    /// Number of housekeeping traces (hidden until picked in the legend)
    pub housekeeping_channels: usize,
    /// Non-numeric columns present in the input but not plotted
    pub skipped_columns: Vec<String>,
    /// Size of the written document
    pub output_bytes: u64,
}

impl ConversionStats {
    /// Total number of traces in the figure
    pub fn trace_count(&self) -> usize {
        self.eeg_channels
            + self.ecg_channels
            + self.cm_channels
            + self.other_channels
            + self.housekeeping_channels
    }

    fn from_dataset(read: &Dataset, plotted: &Dataset) -> Self {
        Self {
            rows_read: read.row_count(),
            rows_plotted: plotted.row_count(),
            eeg_channels: plotted.channels_of(ChannelKind::Eeg).count(),
            ecg_channels: plotted.channels_of(ChannelKind::Ecg).count(),
            cm_channels: plotted.channels_of(ChannelKind::CommonMode).count(),
            other_channels: plotted.channels_of(ChannelKind::Other).count(),
            housekeeping_channels: plotted.channels_of(ChannelKind::Housekeeping).count(),
            skipped_columns: plotted.skipped().to_vec(),
            output_bytes: 0,
        }
    }
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plotted {} traces ({} EEG, {} ECG, {} CM, {} other, {} hidden) over {} of {} rows",
            self.trace_count(),
            self.eeg_channels,
            self.ecg_channels,
            self.cm_channels,
            self.other_channels,
            self.housekeeping_channels,
            self.rows_plotted,
            self.rows_read
        )
    }
}

/// CSV to interactive HTML converter
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Converter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Converter with the given settings
    pub fn with_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Load the input and build the figure without writing anything
    pub fn render<P: AsRef<Path>>(
        &self,
        input: P,
    ) -> Result<(Figure, ConversionStats), ConvertError> {
        self.config.validate()?;

        info!("Reading CSV (skipping '#' lines)...");
        let dataset = load_csv(input, &self.config.load)?;

        let factor = self.config.downsample_factor();
        let plotted = dataset.downsample(factor);
        if factor > 1 {
            info!(
                "Downsampled by factor {}. New length: {}",
                factor,
                plotted.row_count()
            );
        }

        let figure = Figure::build(&plotted, &self.config.figure);
        let stats = ConversionStats::from_dataset(&dataset, &plotted);
        Ok((figure, stats))
    }

    /// Convert `input` (CSV) into a standalone HTML document at `output`.
    ///
    /// On any error the output path is left as it was before the call.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ConversionStats, ConvertError> {
        let (figure, mut stats) = self.render(input)?;

        let html = figure.to_html();
        stats.output_bytes = write_atomic(output.as_ref(), html.as_bytes())?;
        info!("Interactive plot saved to {}", output.as_ref().display());

        Ok(stats)
    }
}
