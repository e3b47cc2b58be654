mod chart;
mod layout;

use crate::tui::app::ChartView;
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, view: &ChartView) {
    chart::draw_chart(f, view);
}
