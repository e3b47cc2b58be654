//! poker-winrates: win-rate report for simulated poker hands
//!
//! Reads a summary file written by a hand simulator, computes each hand's
//! win ratio, prints the hands from best to worst and shows them as a
//! horizontal bar chart in the terminal.
//!
//! ## Quick start: load a summary
//! ```
//! use poker_winrates::loader::HandSummary;
//!
//! let text = "\"10,1000\"\n\"Flush,100,40\"\n\"Straight,200,20\"\n\"Pair,700,350\"\n";
//! let (hands, metadata) = HandSummary::from_reader(text.as_bytes()).unwrap().into_parts();
//!
//! assert_eq!(hands[0].name(), "Pair");
//! assert_eq!(hands[0].win_ratio(), 0.5);
//! assert_eq!(metadata.iterations(), "10");
//! ```
//!
//! ## Binary
//! ```sh
//! cargo run --bin poker-winrates -- 6 --verbose
//! ```

pub mod chart;
pub mod cli;
pub mod loader;
pub mod logging;
pub mod presenter;
pub mod report;
pub mod stats;
pub mod tui;

use cli::ReportConfig;
use loader::LoadError;
use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ReportError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("display error: {0}")]
    Display(#[from] std::io::Error),
}

/// Load the configured summary file and present it.
pub fn run(config: ReportConfig) -> Result<(), ReportError> {
    let path = config.input_path();
    info!(path = %path.display(), players = config.num_players, "reading summary");
    let (hands, metadata) = loader::load_summary(&path)?.into_parts();
    presenter::present(&hands, &metadata, config.num_players)?;
    Ok(())
}
