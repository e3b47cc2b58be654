use clap::Parser;
use poker_winrates::cli::{Args, ReportConfig};
use std::path::PathBuf;

fn config(argv: &[&str]) -> ReportConfig {
    ReportConfig::from(Args::try_parse_from(argv).unwrap())
}

#[test]
fn no_arguments_reads_eight_player_file() {
    let cfg = config(&["poker-winrates"]);
    assert_eq!(cfg, ReportConfig::default());
    assert_eq!(cfg.num_players, 8);
    assert!(!cfg.verbose);
    assert_eq!(cfg.input_path(), PathBuf::from("output_8_players.csv"));
}

#[test]
fn player_count_and_verbose_pick_the_file() {
    assert_eq!(config(&["poker-winrates", "6"]).input_path(), PathBuf::from("output_6_players.csv"));
    assert_eq!(
        config(&["poker-winrates", "-v", "3"]).input_path(),
        PathBuf::from("output_3_players_verbose.csv")
    );
    assert_eq!(
        config(&["poker-winrates", "--verbose"]).input_path(),
        PathBuf::from("output_8_players_verbose.csv")
    );
}

#[test]
fn rejects_non_numeric_player_count_and_extra_flags() {
    assert!(Args::try_parse_from(["poker-winrates", "many"]).is_err());
    assert!(Args::try_parse_from(["poker-winrates", "--debug"]).is_err());
}
