//! # Interactive Figure Module
//!
//! Turns a [`Dataset`](crate::dataset::Dataset) into a plotly figure: one line
//! trace per channel over a shared, zoomable time axis.
//!
//! ## Layout
//!
//! - Primary y axis: EEG and unlabelled channels (µV)
//! - Secondary y axis (right): ECG and common-mode channels, common mode dashed
//! - Range slider under the time axis, unified hover across traces
//! - Button bar toggling trace groups: All, EEG only, ECG+CM only, Hide all
//!
//! The rendered HTML embeds plotly.js, so the document opens offline.

mod builder;
mod config;
mod readback;


pub use builder::{Figure, TraceSummary};
pub use config::{FigureConfig, DEFAULT_HEIGHT, DEFAULT_TITLE};
pub use readback::{read_traces, EmbeddedTrace};
