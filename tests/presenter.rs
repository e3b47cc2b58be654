use poker_winrates::loader::HandSummary;
use poker_winrates::presenter::{present_to, ChartOutcome};

#[test]
fn listing_is_written_and_chart_skipped_without_terminal() {
    let text = "\"10,1000\"\n\"Flush,100,40\"\n\"Straight,200,20\"\n\"Pair,700,350\"\n";
    let (hands, metadata) = HandSummary::from_reader(text.as_bytes()).unwrap().into_parts();

    let mut out = Vec::new();
    let outcome = present_to(&mut out, false, &hands, &metadata, 8).unwrap();

    assert_eq!(outcome, ChartOutcome::Skipped);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "(\"Pair\", 0.5)\n(\"Flush\", 0.4)\n(\"Straight\", 0.1)\n"
    );
}

#[test]
fn empty_summary_prints_nothing() {
    let (hands, metadata) = HandSummary::from_reader("\"5,0\"\n".as_bytes()).unwrap().into_parts();
    let mut out = Vec::new();
    let outcome = present_to(&mut out, false, &hands, &metadata, 2).unwrap();
    assert_eq!(outcome, ChartOutcome::Skipped);
    assert!(out.is_empty());
}
