use crate::chart::ChartBar;
use crate::tui::app::ChartView;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{chart_and_footer, inner};

// Bar lengths are integers; ratios are scaled to this many steps.
const BAR_SCALE: u64 = 10_000;

fn scaled(bar: &ChartBar) -> u64 {
    (bar.value.max(0.0) * BAR_SCALE as f64).round() as u64
}

pub(super) fn draw_chart(f: &mut Frame, view: &ChartView) {
    let (chart_area, footer_area) = chart_and_footer(f.area());
    let chart = &view.chart;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(chart.title().to_string()).bold())
        .title_bottom(Line::from(chart.x_label()).centered());

    if chart.is_empty() {
        f.render_widget(block, chart_area);
        let msg = Paragraph::new("No hands in this summary.")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::DIM));
        f.render_widget(msg, inner(chart_area));
        draw_footer(f, footer_area, view, 0);
        return;
    }

    let rows = inner(chart_area).height as usize;
    let bars: Vec<Bar> = view
        .visible_bars(rows)
        .map(|bar| {
            Bar::default()
                .label(Line::from(bar.label.clone()))
                .value(scaled(bar))
                .text_value(bar.annotation())
        })
        .collect();
    let shown = bars.len();

    // Ratios above 1 only show up when a producer counts more wins than
    // deals; stretch the axis instead of clipping those bars.
    let max = chart.bars().iter().map(scaled).max().unwrap_or(0).max(BAR_SCALE);

    let bar_chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(max)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .label_style(Style::default().fg(Color::White))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(bar_chart, chart_area);

    draw_footer(f, footer_area, view, shown);
}

fn draw_footer(f: &mut Frame, area: Rect, view: &ChartView, shown: usize) {
    let total = view.chart.len();
    let range = if shown == 0 {
        format!("0 of {total}")
    } else {
        format!("{}-{} of {total}", view.offset() + 1, view.offset() + shown)
    };
    let hints = "[↑/↓] Scroll  [PgUp/PgDn] Page  [Home/End] Jump  [Q] Close";
    let line = Line::from(vec![
        Span::styled(format!("Hands {range}  "), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(hints, Style::default().add_modifier(Modifier::DIM)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
