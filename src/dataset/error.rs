use std::path::PathBuf;

/// Errors that can occur while loading a channel dataset
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// Input file is missing or unreadable
    #[error("Failed to read input file {}", .path.display())]
    Io {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input is not well-formed delimited text
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Input contains no header row (empty or comment-only file)
    #[error("Input has no header row")]
    NoHeader,

    /// Input contains a header but no sample rows
    #[error("Input has a header but no data rows")]
    NoRows,

    /// Requested time column is not among the headers
    #[error("Time column not found: {0}")]
    MissingTimeColumn(String),

    /// A time cell could not be parsed as a number
    #[error("Invalid time value {value:?} in data row {row}")]
    InvalidTime {
        /// 1-based data row (header excluded)
        row: usize,
        /// Raw cell content
        value: String,
    },

    /// A channel does not have one sample per time point
    #[error("Channel {name} has {found} samples, expected {expected}")]
    LengthMismatch {
        /// Channel name
        name: String,
        /// Length of the time axis
        expected: usize,
        /// Length of the channel
        found: usize,
    },

    /// Every candidate column was non-numeric
    #[error("No plottable channels found")]
    NoChannels,
}
