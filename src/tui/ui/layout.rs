use ratatui::layout::Constraint;
use ratatui::prelude::{Layout, Rect};

/// Area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Split into the chart body and a one-line footer.
pub(super) fn chart_and_footer(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(ratatui::prelude::Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (rows[0], rows[1])
}
