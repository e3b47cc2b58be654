use crate::chart::WinRateChart;
use crate::report::write_report;
use crate::stats::{HandStat, RunMetadata};
use crate::tui::{self, app::ChartView};
use std::io::{self, IsTerminal, Write};
use tracing::{info, warn};

/// Whether the chart made it to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOutcome {
    Shown,
    Skipped,
}

/// Print the listing to stdout, then show the chart until it is closed.
///
/// `hands` must be sorted highest win ratio first. Without a terminal on
/// stdout the listing is still printed and the chart is skipped.
pub fn present(hands: &[HandStat], metadata: &RunMetadata, num_players: u32) -> io::Result<()> {
    let terminal = io::stdout().is_terminal();
    present_to(&mut io::stdout(), terminal, hands, metadata, num_players)?;
    Ok(())
}

/// Write the listing to `out`, then show the chart if `terminal` is set.
/// The listing is flushed before the chart takes over the screen.
pub fn present_to<W: Write>(
    out: &mut W,
    terminal: bool,
    hands: &[HandStat],
    metadata: &RunMetadata,
    num_players: u32,
) -> io::Result<ChartOutcome> {
    write_report(out, hands)?;

    let chart = WinRateChart::new(hands, metadata, num_players);
    if !terminal {
        warn!("stdout is not a terminal, skipping chart");
        return Ok(ChartOutcome::Skipped);
    }
    info!(bars = chart.len(), "showing chart");
    tui::show_chart(&mut ChartView::new(chart))?;
    Ok(ChartOutcome::Shown)
}
