use super::DataLoadError;
use crate::channels::ChannelKind;

/// Horizontal axis shared by every channel of a dataset
#[derive(Debug, Clone, PartialEq)]
pub enum TimeAxis {
    /// Explicit time column taken from the input
    Column {
        /// Header of the time column
        name: String,
        /// One time value per row, in row order
        values: Vec<f64>,
    },
    /// No time column: the row position is the time value
    RowIndex {
        /// Number of rows on the axis
        len: usize,
        /// Distance between consecutive row positions (1 unless downsampled)
        step: usize,
    },
}

impl TimeAxis {
    /// Number of time points
    pub fn len(&self) -> usize {
        match self {
            TimeAxis::Column { values, .. } => values.len(),
            TimeAxis::RowIndex { len, .. } => *len,
        }
    }

    /// Whether the axis has no time points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the axis is derived from row positions
    pub fn is_implicit(&self) -> bool {
        matches!(self, TimeAxis::RowIndex { .. })
    }

    /// Header of the time column, if one was found
    pub fn name(&self) -> Option<&str> {
        match self {
            TimeAxis::Column { name, .. } => Some(name),
            TimeAxis::RowIndex { .. } => None,
        }
    }

    /// Materialize the time values (row positions for an implicit axis)
    pub fn values(&self) -> Vec<f64> {
        match self {
            TimeAxis::Column { values, .. } => values.clone(),
            TimeAxis::RowIndex { len, step } => (0..*len).map(|i| (i * step) as f64).collect(),
        }
    }

    /// Implicit axis over `len` consecutive rows
    pub fn rows(len: usize) -> Self {
        TimeAxis::RowIndex { len, step: 1 }
    }

    /// Keep every `step`-th point, starting at the first.
    ///
    /// An implicit axis keeps the original row positions, so a downsampled
    /// plot still shows where each sample sat in the file.
    fn downsample(&self, step: usize) -> Self {
        match self {
            TimeAxis::Column { name, values } => TimeAxis::Column {
                name: name.clone(),
                values: values.iter().copied().step_by(step).collect(),
            },
            TimeAxis::RowIndex { len, step: current } => TimeAxis::RowIndex {
                len: len.div_ceil(step),
                step: current * step,
            },
        }
    }
}

/// One named signal column
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    /// Column header
    pub name: String,
    /// Semantic group, decides axis placement
    pub kind: ChannelKind,
    /// One sample per row; `None` marks an empty or non-numeric cell
    pub samples: Vec<Option<f64>>,
}

impl Channel {
    /// Create a channel from its samples
    pub fn new(name: impl Into<String>, kind: ChannelKind, samples: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            kind,
            samples,
        }
    }

    /// Number of samples, gaps included
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the channel has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples holding a value
    pub fn numeric_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_some()).count()
    }

    fn downsample(&self, step: usize) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            samples: self.samples.iter().copied().step_by(step).collect(),
        }
    }
}

/// Parsed multichannel recording, rows aligned in time
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    time: TimeAxis,
    channels: Vec<Channel>,
    skipped: Vec<String>,
}

impl Dataset {
    /// Assemble a dataset, checking that every channel matches the time axis
    pub fn new(time: TimeAxis, channels: Vec<Channel>) -> Result<Self, DataLoadError> {
        let expected = time.len();
        if let Some(bad) = channels.iter().find(|c| c.len() != expected) {
            return Err(DataLoadError::LengthMismatch {
                name: bad.name.clone(),
                expected,
                found: bad.len(),
            });
        }

        Ok(Self {
            time,
            channels,
            skipped: Vec::new(),
        })
    }

    /// Record columns that held no numeric cell and were dropped during loading
    pub fn with_skipped(mut self, skipped: Vec<String>) -> Self {
        self.skipped = skipped;
        self
    }

    /// The shared time axis
    pub fn time(&self) -> &TimeAxis {
        &self.time
    }

    /// Plotted channels in input column order, housekeeping included
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Headers of the columns that were present but not plotted
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Number of time samples (rows)
    pub fn row_count(&self) -> usize {
        self.time.len()
    }

    /// Look up a channel by its column header
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name == name)
    }

    /// Channels belonging to one group
    pub fn channels_of(&self, kind: ChannelKind) -> impl Iterator<Item = &Channel> {
        self.channels.iter().filter(move |c| c.kind == kind)
    }

    /// Keep every `step`-th row. A step of 0 or 1 returns an unchanged copy.
    pub fn downsample(&self, step: usize) -> Self {
        if step <= 1 {
            return self.clone();
        }

        Self {
            time: self.time.downsample(step),
            channels: self.channels.iter().map(|c| c.downsample(step)).collect(),
            skipped: self.skipped.clone(),
        }
    }
}
