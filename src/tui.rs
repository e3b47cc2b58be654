//! Full-screen terminal viewer for the win-rate chart.

pub mod app;
pub mod controller;
pub mod ui;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::warn;

use app::ChartView;

const TICK_RATE: Duration = Duration::from_millis(250);

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Show the chart and block until the viewer closes it. The terminal is
/// restored even if drawing fails.
pub fn show_chart(view: &mut ChartView) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let res = controller::run(&mut terminal, view, TICK_RATE);
    settle(res, restore_terminal(terminal))
}

/// A draw-loop error wins over a restore error; the latter is only logged
/// then.
fn settle(res: io::Result<()>, restored: io::Result<()>) -> io::Result<()> {
    match (res, restored) {
        (Err(e), Err(restore)) => {
            warn!(error = %restore, "failed to restore terminal");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_error_is_kept_when_restore_also_fails() {
        let res = Err(io::Error::other("draw"));
        let restored = Err(io::Error::other("restore"));
        assert_eq!(settle(res, restored).unwrap_err().to_string(), "draw");
    }

    #[test]
    fn restore_error_surfaces_after_clean_run() {
        let restored = Err(io::Error::other("restore"));
        assert_eq!(settle(Ok(()), restored).unwrap_err().to_string(), "restore");
        assert!(settle(Ok(()), Ok(())).is_ok());
    }
}
