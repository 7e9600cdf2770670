#![no_main]

use eegplot::dataset::{from_reader, LoadOptions};
use eegplot::figure::{Figure, FigureConfig};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Loading must either succeed or return an error, never panic
    let Ok(dataset) = from_reader(Cursor::new(data), &LoadOptions::default()) else {
        return;
    };

    // Every channel shares the time axis length
    for channel in dataset.channels() {
        assert_eq!(channel.len(), dataset.row_count());
    }

    let figure = Figure::build(&dataset.downsample(3), &FigureConfig::default());
    assert_eq!(figure.trace_count(), dataset.channels().len());
});
