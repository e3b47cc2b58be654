use crate::chart::{ChartBar, WinRateChart};

/// High-level input actions for the chart viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Close,
}

/// Viewer state: the chart plus how far it is scrolled.
///
/// `offset` counts bars from the top of the screen, where the highest win
/// rate is drawn. It never exceeds the index of the last bar.
#[derive(Debug)]
#[non_exhaustive]
pub struct ChartView {
    pub chart: WinRateChart,
    offset: usize,
    closed: bool,
}

impl ChartView {
    pub const PAGE_SIZE: usize = 10;

    pub fn new(chart: WinRateChart) -> Self {
        Self { chart, offset: 0, closed: false }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Bars in screen order (highest first), starting at the scroll offset.
    pub fn visible_bars(&self, rows: usize) -> impl Iterator<Item = &ChartBar> {
        self.chart.bars().iter().rev().skip(self.offset).take(rows)
    }

    fn max_offset(&self) -> usize {
        self.chart.len().saturating_sub(1)
    }

    fn scroll_by(&mut self, delta: isize) {
        let next = self.offset.saturating_add_signed(delta);
        self.offset = next.min(self.max_offset());
    }

    /// Apply an action. Returns `true` when the viewer should close.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ScrollUp => self.scroll_by(-1),
            InputAction::ScrollDown => self.scroll_by(1),
            InputAction::PageUp => self.scroll_by(-(Self::PAGE_SIZE as isize)),
            InputAction::PageDown => self.scroll_by(Self::PAGE_SIZE as isize),
            InputAction::Top => self.offset = 0,
            InputAction::Bottom => self.offset = self.max_offset(),
            InputAction::Close => self.closed = true,
        }
        self.closed
    }
}
