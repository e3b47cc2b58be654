use clap::Parser;
use poker_winrates::cli::{Args, ReportConfig};
use poker_winrates::{logging, ReportError};

fn main() -> Result<(), ReportError> {
    logging::init();
    let args = Args::parse();
    poker_winrates::run(ReportConfig::from(args))
}
