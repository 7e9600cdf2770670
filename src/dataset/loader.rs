use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};

use super::types::{Channel, Dataset, TimeAxis};
use super::DataLoadError;
use crate::channels::{self, ChannelKind};

/// Options controlling how a CSV file is turned into a [`Dataset`]
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter (default: `,`)
    pub delimiter: u8,

    /// Explicit time column; detected from the headers when `None`
    pub time_column: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            time_column: None,
        }
    }
}

impl LoadOptions {
    /// Use the named column as the time axis
    pub fn with_time_column(mut self, name: impl Into<String>) -> Self {
        self.time_column = Some(name.into());
        self
    }

    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Load a dataset from a CSV file
pub fn load_csv<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Dataset, DataLoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Read {} bytes from {}", bytes.len(), path.display());
    parse_csv(&String::from_utf8_lossy(&bytes), options)
}

/// Load a dataset from any reader producing CSV text
pub fn from_reader<R: Read>(mut reader: R, options: &LoadOptions) -> Result<Dataset, DataLoadError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| DataLoadError::Io {
            path: "<reader>".into(),
            source,
        })?;
    parse_csv(&String::from_utf8_lossy(&bytes), options)
}

/// Skip a leading byte order mark and the `#` preamble, so the first
/// remaining line is the header.
///
/// Only whole lines before the header are dropped here. Comment lines between
/// records are left to the CSV reader, which knows when a `#` sits inside a
/// quoted cell.
fn strip_preamble(text: &str) -> &str {
    let mut rest = text.strip_prefix('\u{feff}').unwrap_or(text);
    loop {
        let line = rest.trim_start();
        if !line.starts_with('#') {
            return rest;
        }
        rest = match line.find('\n') {
            Some(end) => &line[end + 1..],
            None => "",
        };
    }
}

/// Parse one cell as a sample; empty, non-numeric and non-finite cells are gaps
fn parse_sample(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Column being filled while rows are read
struct ColumnBuf {
    index: usize,
    name: String,
    samples: Vec<Option<f64>>,
}

/// Parse CSV text into a dataset
pub fn parse_csv(text: &str, options: &LoadOptions) -> Result<Dataset, DataLoadError> {
    let body = strip_preamble(text);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(DataLoadError::NoHeader);
    }
    debug!("Columns: {:?}", headers);

    let time_index = match &options.time_column {
        Some(name) => Some(
            headers
                .iter()
                .position(|h| h == name)
                .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
                .ok_or_else(|| DataLoadError::MissingTimeColumn(name.clone()))?,
        ),
        None => channels::find_time_column(&headers),
    };

    let mut skipped = Vec::new();
    let mut columns = Vec::new();
    for (index, name) in headers.iter().enumerate() {
        if Some(index) == time_index {
            continue;
        }
        columns.push(ColumnBuf {
            index,
            name: name.clone(),
            samples: Vec::new(),
        });
    }

    let mut time_values = Vec::new();
    let mut row_count = 0;
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        row_count += 1;

        if let Some(ti) = time_index {
            let cell = record.get(ti).unwrap_or_default();
            let value = cell
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| DataLoadError::InvalidTime {
                    row: row + 1,
                    value: cell.to_string(),
                })?;
            time_values.push(value);
        }

        for column in &mut columns {
            let cell = record.get(column.index).unwrap_or_default();
            column.samples.push(parse_sample(cell));
        }
    }

    if row_count == 0 {
        return Err(DataLoadError::NoRows);
    }

    let time = match time_index {
        Some(ti) => TimeAxis::Column {
            name: headers[ti].clone(),
            values: time_values,
        },
        None => TimeAxis::rows(row_count),
    };

    let mut plotted = Vec::with_capacity(columns.len());
    for column in columns {
        let kind = channels::classify(&column.name);
        let channel = Channel::new(column.name, kind, column.samples);
        if channel.numeric_count() == 0 {
            warn!("Skipping non-numeric column {:?}", channel.name);
            skipped.push(channel.name);
            continue;
        }
        plotted.push(channel);
    }

    // Unlabelled montages: treat every remaining numeric column as EEG
    if !plotted.iter().any(|c| c.kind == ChannelKind::Eeg) {
        for channel in plotted.iter_mut().filter(|c| c.kind == ChannelKind::Other) {
            channel.kind = ChannelKind::Eeg;
        }
    }

    if plotted.is_empty() {
        return Err(DataLoadError::NoChannels);
    }

    info!("Time: {}", time.name().unwrap_or("<row index>"));
    for kind in [
        ChannelKind::Eeg,
        ChannelKind::Ecg,
        ChannelKind::CommonMode,
        ChannelKind::Other,
        ChannelKind::Housekeeping,
    ] {
        let names: Vec<&str> = plotted
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.name.as_str())
            .collect();
        if !names.is_empty() {
            info!("{}: {:?}", kind, names);
        }
    }

    Ok(Dataset::new(time, plotted)?.with_skipped(skipped))
}
