use super::*;
use crate::channels::ChannelKind;
use std::fs;
use tempfile::tempdir;

fn parse(text: &str) -> Result<Dataset, DataLoadError> {
    parse_csv(text, &LoadOptions::default())
}

// ==================== Loading Tests ====================

#[test]
fn test_basic_load_with_time_alias() {
    let dataset = parse("t,eeg1,ecg1\n0,0.1,0.9\n1,0.2,0.8\n").unwrap();

    assert_eq!(dataset.row_count(), 2);
    assert_eq!(dataset.time().name(), Some("t"));
    assert_eq!(dataset.time().values(), vec![0.0, 1.0]);

    let names: Vec<&str> = dataset.channels().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["eeg1", "ecg1"]);
    assert_eq!(
        dataset.channel("eeg1").unwrap().samples,
        vec![Some(0.1), Some(0.2)]
    );
    assert_eq!(
        dataset.channel("ecg1").unwrap().samples,
        vec![Some(0.9), Some(0.8)]
    );
}

#[test]
fn test_unlabelled_columns_become_eeg() {
    let dataset = parse("t,eeg1,ecg1\n0,0.1,0.9\n").unwrap();
    assert!(dataset.channels().iter().all(|c| c.kind == ChannelKind::Eeg));
}

#[test]
fn test_group_classification() {
    let csv = "Time,Fz,Cz,X1:LEOG,CM,Aux\n0.0,1,2,3,4,5\n0.5,1,2,3,4,5\n";
    let dataset = parse(csv).unwrap();

    assert_eq!(dataset.channel("Fz").unwrap().kind, ChannelKind::Eeg);
    assert_eq!(dataset.channel("X1:LEOG").unwrap().kind, ChannelKind::Ecg);
    assert_eq!(dataset.channel("CM").unwrap().kind, ChannelKind::CommonMode);
    // EEG exists, so unlabelled columns keep their own group
    assert_eq!(dataset.channel("Aux").unwrap().kind, ChannelKind::Other);
    assert_eq!(dataset.channels_of(ChannelKind::Eeg).count(), 2);
}

#[test]
fn test_comment_lines_are_skipped() {
    let csv = "# Device: DSI-24\n  # Sample rate: 300\nTime,Fz\n# mid-file note\n0,1.5\n1,2.5\n";
    let dataset = parse(csv).unwrap();

    assert_eq!(dataset.row_count(), 2);
    assert_eq!(
        dataset.channel("Fz").unwrap().samples,
        vec![Some(1.5), Some(2.5)]
    );
}

#[test]
fn test_quoted_cell_may_contain_hash_line() {
    let csv = "Time,Fz,Note\n0,1,\"a\n# b\"\n1,2,c\n";
    let dataset = parse(csv).unwrap();

    assert_eq!(dataset.row_count(), 2);
    assert_eq!(
        dataset.channel("Fz").unwrap().samples,
        vec![Some(1.0), Some(2.0)]
    );
    assert_eq!(dataset.skipped(), &["Note".to_string()]);
}

#[test]
fn test_byte_order_mark_before_preamble() {
    let csv = "\u{feff}# Device: DSI-24\nTime,Fz\n0,1\n1,2\n";
    let dataset = parse(csv).unwrap();

    assert_eq!(dataset.time().name(), Some("Time"));
    assert_eq!(dataset.row_count(), 2);

    let dataset = parse("\u{feff}Time,Fz\n0,1\n").unwrap();
    assert_eq!(dataset.time().name(), Some("Time"));
}

#[test]
fn test_housekeeping_columns_are_kept() {
    let csv = "Time,Fz,Trigger,Time_Offset,ADC_Status\n0,1,0,0,1\n";
    let dataset = parse(csv).unwrap();

    assert_eq!(dataset.channels().len(), 4);
    assert!(dataset.skipped().is_empty());
    let housekeeping: Vec<&str> = dataset
        .channels_of(ChannelKind::Housekeeping)
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(housekeeping, vec!["Trigger", "Time_Offset", "ADC_Status"]);
    assert_eq!(
        dataset.channel("ADC_Status").unwrap().samples,
        vec![Some(1.0)]
    );
}

#[test]
fn test_non_numeric_column_is_skipped() {
    let csv = "Time,Fz,Note\n0,1,start\n1,2,\n2,3,stop\n";
    let dataset = parse(csv).unwrap();

    assert!(dataset.channel("Note").is_none());
    assert_eq!(dataset.skipped(), &["Note".to_string()]);
}

#[test]
fn test_bad_cells_become_gaps() {
    let csv = "Time,Fz\n0,1.0\n1,\n2,n/a\n3,NaN\n4,4.0\n";
    let dataset = parse(csv).unwrap();

    assert_eq!(
        dataset.channel("Fz").unwrap().samples,
        vec![Some(1.0), None, None, None, Some(4.0)]
    );
}

#[test]
fn test_implicit_time_axis() {
    let dataset = parse("Fz,Cz\n1,2\n3,4\n5,6\n").unwrap();

    assert!(dataset.time().is_implicit());
    assert_eq!(dataset.time().values(), vec![0.0, 1.0, 2.0]);
    assert_eq!(dataset.channels().len(), 2);
}

#[test]
fn test_explicit_time_column() {
    let options = LoadOptions::default().with_time_column("Clock");
    let dataset = parse_csv("Fz,Clock\n1,10\n2,20\n", &options).unwrap();

    assert_eq!(dataset.time().name(), Some("Clock"));
    assert_eq!(dataset.time().values(), vec![10.0, 20.0]);
    assert_eq!(dataset.channels().len(), 1);
}

#[test]
fn test_explicit_time_column_missing() {
    let options = LoadOptions::default().with_time_column("Clock");
    let result = parse_csv("Fz,Cz\n1,2\n", &options);
    assert!(matches!(result, Err(DataLoadError::MissingTimeColumn(name)) if name == "Clock"));
}

#[test]
fn test_semicolon_delimiter() {
    let options = LoadOptions::default().with_delimiter(b';');
    let dataset = parse_csv("Time;Fz\n0;1,5\n", &options);
    // "1,5" is not a number, so the only channel has no numeric cell
    assert!(matches!(dataset, Err(DataLoadError::NoChannels)));

    let dataset = parse_csv("Time;Fz\n0;1.5\n", &options).unwrap();
    assert_eq!(dataset.channel("Fz").unwrap().samples, vec![Some(1.5)]);
}

// ==================== Error Tests ====================

#[test]
fn test_header_only_is_no_rows() {
    assert!(matches!(parse("t,eeg1,ecg1\n"), Err(DataLoadError::NoRows)));
}

#[test]
fn test_empty_input_is_no_header() {
    assert!(matches!(parse(""), Err(DataLoadError::NoHeader)));
    assert!(matches!(parse("# only a comment\n"), Err(DataLoadError::NoHeader)));
}

#[test]
fn test_ragged_row_is_csv_error() {
    let result = parse("Time,Fz,Cz\n0,1,2\n1,2\n");
    assert!(matches!(result, Err(DataLoadError::Csv(_))));
}

#[test]
fn test_invalid_time_value() {
    let result = parse("Time,Fz\n0,1\noops,2\n");
    match result {
        Err(DataLoadError::InvalidTime { row, value }) => {
            assert_eq!(row, 2);
            assert_eq!(value, "oops");
        }
        other => panic!("expected InvalidTime, got {:?}", other),
    }
}

#[test]
fn test_only_housekeeping_columns_stay_housekeeping() {
    let dataset = parse("Time,Trigger\n0,1\n").unwrap();
    assert_eq!(dataset.channels()[0].kind, ChannelKind::Housekeeping);
}

#[test]
fn test_only_non_numeric_columns_is_no_channels() {
    let result = parse("Time,Note\n0,start\n1,stop\n");
    assert!(matches!(result, Err(DataLoadError::NoChannels)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = load_csv(dir.path().join("missing.csv"), &LoadOptions::default());
    assert!(matches!(result, Err(DataLoadError::Io { .. })));
}

#[test]
fn test_load_from_file_with_invalid_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.csv");
    let mut bytes = b"Time,Fz \xb5V\n0,1.0\n".to_vec();
    bytes.extend_from_slice(b"1,2.0\n");
    fs::write(&path, bytes).unwrap();

    let dataset = load_csv(&path, &LoadOptions::default()).unwrap();
    assert_eq!(dataset.row_count(), 2);
    assert_eq!(dataset.channels()[0].kind, ChannelKind::Eeg);
}

#[test]
fn test_from_reader() {
    let data = "Time,Cz\n0,1\n".as_bytes();
    let dataset = from_reader(data, &LoadOptions::default()).unwrap();
    assert_eq!(dataset.channels().len(), 1);
}

// ==================== Dataset Tests ====================

#[test]
fn test_dataset_rejects_length_mismatch() {
    let time = TimeAxis::rows(3);
    let channel = Channel::new("Fz", ChannelKind::Eeg, vec![Some(1.0)]);
    let result = Dataset::new(time, vec![channel]);
    assert!(matches!(
        result,
        Err(DataLoadError::LengthMismatch {
            expected: 3,
            found: 1,
            ..
        })
    ));
}

#[test]
fn test_downsample_explicit_time() {
    let dataset = parse("Time,Fz\n0,0\n1,1\n2,2\n3,3\n4,4\n").unwrap();
    let reduced = dataset.downsample(2);

    assert_eq!(reduced.row_count(), 3);
    assert_eq!(reduced.time().values(), vec![0.0, 2.0, 4.0]);
    assert_eq!(
        reduced.channel("Fz").unwrap().samples,
        vec![Some(0.0), Some(2.0), Some(4.0)]
    );
}

#[test]
fn test_downsample_implicit_time_keeps_row_positions() {
    let dataset = parse("Fz\n0\n1\n2\n3\n4\n5\n6\n").unwrap();
    let reduced = dataset.downsample(3);

    assert!(reduced.time().is_implicit());
    assert_eq!(reduced.time().values(), vec![0.0, 3.0, 6.0]);
    assert_eq!(reduced.channels()[0].len(), 3);
}

#[test]
fn test_downsample_by_one_is_identity() {
    let dataset = parse("Time,Fz\n0,1\n1,2\n").unwrap();
    assert_eq!(dataset.downsample(1), dataset);
}
