//! # Channel Classification
//!
//! Maps CSV column names onto semantic channel groups. Recording software names
//! columns freely (`"EEG Fz-Ref"`, `"X1:ECG"`, `"Trigger"`), so matching is done on
//! whole words: a name is split on every character that is not alphanumeric or
//! `_`, and the resulting words are compared case-insensitively.
//!
//! | Group | Words |
//! |-------|-------|
//! | EEG | 10-20 electrode labels ([`electrodes::EEG`]) |
//! | ECG | `x1`, `x2`, `leog`, `reog` |
//! | Common mode | `cm`, `common mode`, `common_mode`, `commonmode` |
//! | Housekeeping | `x3`, `trigger`, `time_offset`, `adc_status`, `adc_sequence`, `event`, `comments` |
//!
//! Housekeeping columns are still plotted, but start hidden (legend only).

use std::fmt;

/// Well-known column labels
pub mod electrodes {
    /// 10-20 system electrode labels recognised as EEG channels
    pub const EEG: &[&str] = &[
        "Fz", "Cz", "P3", "C3", "F3", "F4", "C4", "P4", "Fp1", "Fp2", "T3", "T4", "T5", "T6",
        "O1", "O2", "F7", "F8", "A1", "A2", "Pz",
    ];

    /// Auxiliary inputs carrying ECG/EOG leads
    pub const ECG: &[&str] = &["x1", "x2", "leog", "reog"];

    /// Single-word common-mode labels
    pub const COMMON_MODE: &[&str] = &["cm", "common_mode", "commonmode"];

    /// Housekeeping columns, plotted hidden by default
    pub const HOUSEKEEPING: &[&str] = &[
        "x3",
        "trigger",
        "time_offset",
        "timeoffset",
        "adc_status",
        "adcstatus",
        "adc_sequence",
        "adcsequence",
        "event",
        "comments",
    ];

    /// Names accepted as a time axis when no column mentions "time"
    pub const TIME_ALIASES: &[&str] = &["t", "index", "sample", "samples"];
}

/// Semantic group of a signal channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// Scalp EEG electrode (plotted on the primary axis)
    Eeg,
    /// ECG or EOG lead (plotted on the secondary axis)
    Ecg,
    /// Amplifier common-mode reference (secondary axis, dashed)
    CommonMode,
    /// Any other numeric column (primary axis)
    Other,
    /// Trigger, event or ADC bookkeeping column (primary axis, hidden)
    Housekeeping,
}

impl ChannelKind {
    /// Whether traces of this kind belong on the secondary (right) y axis
    pub fn is_secondary(&self) -> bool {
        matches!(self, ChannelKind::Ecg | ChannelKind::CommonMode)
    }

    /// Whether traces of this kind start hidden and stay out of the group toggles
    pub fn is_hidden(&self) -> bool {
        matches!(self, ChannelKind::Housekeeping)
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChannelKind::Eeg => "EEG",
            ChannelKind::Ecg => "ECG",
            ChannelKind::CommonMode => "CM",
            ChannelKind::Other => "other",
            ChannelKind::Housekeeping => "housekeeping",
        };
        f.write_str(label)
    }
}

/// Split a column name into lowercase words.
///
/// Word characters are alphanumerics and `_`, matching the usual `\b`
/// boundary semantics.
fn words(name: &str) -> Vec<String> {
    name.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn has_word(words: &[String], candidates: &[&str]) -> bool {
    words
        .iter()
        .any(|w| candidates.iter().any(|c| w.eq_ignore_ascii_case(c)))
}

/// Whether the column carries housekeeping data rather than a signal
pub fn is_housekeeping(name: &str) -> bool {
    has_word(&words(name), electrodes::HOUSEKEEPING)
}

/// Classify a column name.
///
/// Housekeeping words win over everything else. Then EEG labels win over ECG
/// labels, which win over common mode, so that a name such as `"Fz (CM ref)"`
/// is still treated as an electrode.
pub fn classify(name: &str) -> ChannelKind {
    let words = words(name);
    if has_word(&words, electrodes::HOUSEKEEPING) {
        ChannelKind::Housekeeping
    } else if has_word(&words, electrodes::EEG) {
        ChannelKind::Eeg
    } else if has_word(&words, electrodes::ECG) {
        ChannelKind::Ecg
    } else if has_word(&words, electrodes::COMMON_MODE) || is_common_mode_phrase(&words) {
        ChannelKind::CommonMode
    } else {
        ChannelKind::Other
    }
}

/// `"common mode"` spelled as two separate words
fn is_common_mode_phrase(words: &[String]) -> bool {
    words
        .windows(2)
        .any(|pair| pair[0] == "common" && pair[1] == "mode")
}

/// Locate the time column among the headers.
///
/// Preference order: an exact `time` (any case), then the first non-housekeeping
/// name containing `time`, then a [`electrodes::TIME_ALIASES`] name. Returns
/// `None` when the row position should serve as the time axis.
pub fn find_time_column(headers: &[String]) -> Option<usize> {
    if let Some(i) = headers.iter().position(|h| h.eq_ignore_ascii_case("time")) {
        return Some(i);
    }

    if let Some(i) = headers
        .iter()
        .position(|h| h.to_lowercase().contains("time") && !is_housekeeping(h))
    {
        return Some(i);
    }

    headers.iter().position(|h| {
        electrodes::TIME_ALIASES
            .iter()
            .any(|alias| h.eq_ignore_ascii_case(alias))
    })
}
