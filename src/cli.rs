use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_NUM_PLAYERS: u32 = 8;

#[derive(Debug, Parser)]
#[command(name = "poker-winrates", version, about = "Show win rates for each simulated hand", long_about = None)]
pub struct Args {
    /// Number of players at a table (selects output_<N>_players.csv).
    #[arg(value_name = "N", default_value_t = DEFAULT_NUM_PLAYERS)]
    pub num_players: u32,

    /// Read the per-combination file (output_<N>_players_verbose.csv).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Settings for one report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    pub num_players: u32,
    pub verbose: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { num_players: DEFAULT_NUM_PLAYERS, verbose: false }
    }
}

impl From<Args> for ReportConfig {
    fn from(args: Args) -> Self {
        Self { num_players: args.num_players, verbose: args.verbose }
    }
}

impl ReportConfig {
    /// Summary file for this run, relative to the working directory.
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(input_file_name(self.num_players, self.verbose))
    }
}

/// `output_<N>_players.csv`, or `output_<N>_players_verbose.csv` in verbose
/// mode.
pub fn input_file_name(num_players: u32, verbose: bool) -> String {
    let suffix = if verbose { "_verbose" } else { "" };
    format!("output_{num_players}_players{suffix}.csv")
}
