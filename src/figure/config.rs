/// Default figure title
pub const DEFAULT_TITLE: &str = "EEG + ECG Multichannel Plot";

/// Default figure height in pixels
pub const DEFAULT_HEIGHT: usize = 700;

/// Presentation settings for the interactive figure
#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    /// Title shown above the plot
    pub title: String,

    /// Figure height in pixels
    pub height: usize,

    /// Convert ECG and common-mode channels from µV to mV (divide by 1000).
    /// Off by default so that plotted values equal the input exactly.
    pub ecg_millivolts: bool,

    /// Show the range slider under the time axis
    pub range_slider: bool,

    /// Show the All / EEG only / ECG+CM only / Hide all button bar
    pub group_buttons: bool,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            height: DEFAULT_HEIGHT,
            ecg_millivolts: false,
            range_slider: true,
            group_buttons: true,
        }
    }
}

impl FigureConfig {
    /// Set the figure title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the figure height in pixels
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Plot ECG and common-mode channels in millivolts
    pub fn with_ecg_millivolts(mut self, enabled: bool) -> Self {
        self.ecg_millivolts = enabled;
        self
    }

    /// Unit label of the secondary axis
    pub(crate) fn secondary_unit(&self) -> &'static str {
        if self.ecg_millivolts {
            "mV"
        } else {
            "µV"
        }
    }
}
