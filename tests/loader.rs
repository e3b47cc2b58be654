use poker_winrates::loader::{load_summary, HandSummary, LoadError};
use poker_winrates::stats::RunMetadata;
use std::io::Write;

fn summary_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "\"{line}\"").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn sample_summary_sorts_by_win_rate() {
    let file = summary_file(&["10,1000", "Flush,100,40", "Straight,200,20", "Pair,700,350"]);
    let (hands, metadata) = load_summary(file.path()).unwrap().into_parts();

    let pairs: Vec<(&str, f64)> = hands.iter().map(|h| (h.name(), h.win_ratio())).collect();
    assert_eq!(pairs, [("Pair", 0.5), ("Flush", 0.4), ("Straight", 0.1)]);
    assert_eq!(metadata, RunMetadata::new("10", "1000"));
}

#[test]
fn never_played_hand_has_zero_ratio() {
    let file = summary_file(&["1,2", "Royal Flush,0,0", "High Card,4,1"]);
    let summary = load_summary(file.path()).unwrap();
    let royal = summary.hands().iter().find(|h| h.name() == "Royal Flush").unwrap();
    assert_eq!(royal.win_ratio(), 0.0);
    assert_eq!(summary.hands().last().unwrap().name(), "Royal Flush");
}

#[test]
fn header_tokens_are_kept_as_text() {
    let file = summary_file(&["1e6,lots", "Pair,1,1"]);
    let summary = load_summary(file.path()).unwrap();
    assert_eq!(summary.metadata().iterations(), "1e6");
    assert_eq!(summary.metadata().total_hands(), "lots");
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output_8_players.csv");
    match load_summary(&path) {
        Err(LoadError::Open { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected open error, got {other:?}"),
    }
}

#[test]
fn non_numeric_count_fails_the_whole_load() {
    let file = summary_file(&["10,1000", "Pair,700,350", "Flush,abc,40"]);
    let err = load_summary(file.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::InvalidCount { line: 3, field: "times_played", ref value, .. } if value == "abc"
    ));
}

#[test]
fn short_row_is_a_missing_field() {
    let text = "\"10,1000\"\n\"Flush,100\"\n";
    let err = HandSummary::from_reader(text.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::MissingField { line: 2, field: "times_won" }));
    assert_eq!(err.to_string(), "line 2: missing field `times_won`");
}

#[test]
fn windows_line_endings_are_accepted() {
    let text = "\"10,1000\"\r\n\"Flush,100,40\"\r\n";
    let summary = HandSummary::from_reader(text.as_bytes()).unwrap();
    assert_eq!(summary.hands()[0].times_won(), 40);
}

#[test]
fn errors_name_the_file_line_after_blank_lines() {
    let text = "\"10,1000\"\n\n\"Pair,2,1\"\n\"Flush,abc,1\"\n";
    let err = HandSummary::from_reader(text.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidCount { line: 4, field: "times_played", .. }));
}

#[test]
fn errors_name_the_file_line_after_multiline_field() {
    let text = "\"10,1000\"\n\"Two\nLine,2,1\"\n\"Flush,3\"\n";
    let err = HandSummary::from_reader(text.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::MissingField { line: 4, field: "times_won" }));
}
