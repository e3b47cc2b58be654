use crate::tui::app::{ChartView, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

/// Draw the chart and block until the viewer closes it.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    view: &mut ChartView,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, view))?;

        // Poll with a timeout so resizes get redrawn without a keypress.
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_action(key.code) {
                    if view.handle_input(action) {
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}

fn key_action(code: KeyCode) -> Option<InputAction> {
    let action = match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Close,
        KeyCode::Up | KeyCode::Char('k') => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => InputAction::ScrollDown,
        KeyCode::PageUp => InputAction::PageUp,
        KeyCode::PageDown => InputAction::PageDown,
        KeyCode::Home | KeyCode::Char('g') => InputAction::Top,
        KeyCode::End | KeyCode::Char('G') => InputAction::Bottom,
        _ => return None,
    };
    Some(action)
}
