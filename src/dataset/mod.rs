//! # Channel Dataset Module
//!
//! Loads a multichannel recording exported as delimited text into a
//! [`Dataset`]: one shared [`TimeAxis`] plus one [`Channel`] per plottable
//! column.
//!
//! ## Input Layout
//!
//! ```text
//! # Device: DSI-24           <- '#' preamble is dropped
//! Time,Fz,Cz,X1:LEOG,Trigger <- header (first non-comment row)
//! 0.000,1.2,0.8,-34.0,0      <- one row per time sample
//! 0.004,1.3,0.7,-33.1,0
//! ```
//!
//! - The time column is detected from the headers (see
//!   [`crate::channels::find_time_column`]) or named explicitly; without one
//!   the row position is used.
//! - Housekeeping columns (trigger, ADC status, events) are kept as
//!   [`crate::channels::ChannelKind::Housekeeping`] channels.
//! - Columns without a single numeric cell are skipped; empty or non-numeric
//!   cells inside numeric columns become gaps.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use eegplot::dataset::{load_csv, LoadOptions};
//!
//! let dataset = load_csv("recording.csv", &LoadOptions::default())?;
//! println!("{} rows, {} channels", dataset.row_count(), dataset.channels().len());
//! # Ok::<(), eegplot::dataset::DataLoadError>(())
//! ```

mod error;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use error::DataLoadError;
pub use loader::{from_reader, load_csv, parse_csv, LoadOptions};
pub use types::{Channel, Dataset, TimeAxis};
