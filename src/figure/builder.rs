use log::debug;
use plotly::common::{Anchor, AxisSide, DashType, Line, Mode, Orientation, Title, Visible};
use plotly::layout::update_menu::{
    Button, ButtonMethod, UpdateMenu, UpdateMenuDirection, UpdateMenuType,
};
use plotly::layout::{Axis, HoverMode, Layout, Legend, RangeSlider};
use plotly::{Plot, Scatter};
use serde_json::{json, Value};

use super::FigureConfig;
use crate::channels::ChannelKind;
use crate::dataset::{Channel, Dataset};

/// Y axis reference of the secondary (right) axis
const SECONDARY_AXIS: &str = "y2";

/// Description of one trace placed in a [`Figure`]
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSummary {
    /// Legend name of the trace
    pub name: String,
    /// Column the trace was built from
    pub column: String,
    /// Channel group
    pub kind: ChannelKind,
    /// Number of points (equals the dataset row count)
    pub points: usize,
    /// Whether the trace sits on the secondary y axis
    pub secondary: bool,
    /// Whether the trace starts hidden (listed in the legend only)
    pub hidden: bool,
}

/// Interactive multichannel figure, ready to be rendered as HTML
pub struct Figure {
    plot: Plot,
    traces: Vec<TraceSummary>,
}

impl std::fmt::Debug for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Figure")
            .field("traces", &self.traces)
            .finish_non_exhaustive()
    }
}

impl Figure {
    /// Build one line trace per channel over the shared time axis.
    ///
    /// EEG and unlabelled channels go on the primary axis, ECG and common-mode
    /// channels on the secondary axis. Housekeeping channels come last and
    /// start hidden. Within each group the input column order is kept.
    pub fn build(dataset: &Dataset, config: &FigureConfig) -> Self {
        let time = dataset.time().values();
        let mut plot = Plot::new();
        let mut traces = Vec::with_capacity(dataset.channels().len());

        for kind in [
            ChannelKind::Eeg,
            ChannelKind::Other,
            ChannelKind::Ecg,
            ChannelKind::CommonMode,
            ChannelKind::Housekeeping,
        ] {
            for channel in dataset.channels_of(kind) {
                let summary = add_channel(&mut plot, &time, channel, config);
                debug!(
                    "Trace {:?} ({}, {} points)",
                    summary.name, summary.kind, summary.points
                );
                traces.push(summary);
            }
        }

        plot.set_layout(build_layout(dataset, config, &traces));
        Self { plot, traces }
    }

    /// Traces in the order they were added to the plot
    pub fn traces(&self) -> &[TraceSummary] {
        &self.traces
    }

    /// Number of traces
    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }

    /// Figure specification (data + layout) as plotly JSON
    pub fn to_json(&self) -> String {
        self.plot.to_json()
    }

    /// Standalone HTML document with plotly.js embedded
    pub fn to_html(&self) -> String {
        self.plot.to_html()
    }
}

fn add_channel(
    plot: &mut Plot,
    time: &[f64],
    channel: &Channel,
    config: &FigureConfig,
) -> TraceSummary {
    let secondary = channel.kind.is_secondary();
    let hidden = channel.kind.is_hidden();
    let millivolts = secondary && config.ecg_millivolts;

    let name = match (channel.kind, config.ecg_millivolts) {
        (ChannelKind::Ecg, true) => format!("{} (mV)", channel.name),
        (ChannelKind::CommonMode, true) => format!("{} (mV, CM)", channel.name),
        _ => channel.name.clone(),
    };

    let samples: Vec<Option<f64>> = if millivolts {
        channel.samples.iter().map(|s| s.map(|v| v / 1000.0)).collect()
    } else {
        channel.samples.clone()
    };

    let mut trace = Scatter::new(time.to_vec(), samples)
        .name(&name)
        .mode(Mode::Lines);
    if secondary {
        trace = trace.y_axis(SECONDARY_AXIS);
    }
    if channel.kind == ChannelKind::CommonMode {
        trace = trace.line(Line::new().dash(DashType::Dot));
    }
    if hidden {
        trace = trace.visible(Visible::LegendOnly);
    }
    plot.add_trace(trace);

    TraceSummary {
        name,
        column: channel.name.clone(),
        kind: channel.kind,
        points: channel.len(),
        secondary,
        hidden,
    }
}

fn build_layout(dataset: &Dataset, config: &FigureConfig, traces: &[TraceSummary]) -> Layout {
    let x_title = if dataset.time().is_implicit() {
        "Sample"
    } else {
        "Time (s)"
    };

    let mut x_axis = Axis::new().title(Title::with_text(x_title));
    if config.range_slider {
        x_axis = x_axis.range_slider(RangeSlider::new().visible(true));
    }

    let mut layout = Layout::new()
        .title(Title::with_text(&config.title))
        .height(config.height)
        .hover_mode(HoverMode::XUnified)
        .legend(
            Legend::new()
                .orientation(Orientation::Horizontal)
                .y_anchor(Anchor::Bottom)
                .y(1.02)
                .x_anchor(Anchor::Right)
                .x(1.0),
        )
        .x_axis(x_axis)
        .y_axis(Axis::new().title(Title::with_text("EEG (µV)")));

    if traces.iter().any(|t| t.secondary) {
        layout = layout.y_axis2(
            Axis::new()
                .title(Title::with_text(format!(
                    "ECG / CM ({})",
                    config.secondary_unit()
                )))
                .overlaying("y")
                .side(AxisSide::Right),
        );
    }

    if config.group_buttons {
        layout = layout.update_menus(vec![group_menu(traces)]);
    }

    layout
}

/// Visibility masks for the trace groups, one entry per trace.
///
/// Hidden traces are `"legendonly"` in every mask, so the buttons never
/// switch them on.
pub(crate) fn visibility_masks(traces: &[TraceSummary]) -> [(&'static str, Vec<Value>); 4] {
    let mask = |shown: fn(&TraceSummary) -> bool| -> Vec<Value> {
        traces
            .iter()
            .map(|t| {
                if t.hidden {
                    json!("legendonly")
                } else {
                    json!(shown(t))
                }
            })
            .collect()
    };

    [
        ("All", mask(|_| true)),
        ("EEG only", mask(|t| !t.secondary)),
        ("ECG+CM only", mask(|t| t.secondary)),
        ("Hide all", mask(|_| false)),
    ]
}

fn group_menu(traces: &[TraceSummary]) -> UpdateMenu {
    let buttons = visibility_masks(traces)
        .into_iter()
        .map(|(label, visible)| {
            Button::new()
                .label(label)
                .method(ButtonMethod::Update)
                .args(json!([{ "visible": visible }]))
        })
        .collect();

    UpdateMenu::new()
        .ty(UpdateMenuType::Buttons)
        .direction(UpdateMenuDirection::Right)
        .x(0.01)
        .y(1.1)
        .buttons(buttons)
}
