//! Chart model for the win-rate bar chart.
//!
//! Bars are stored bottom-to-top, the way plotting libraries lay out
//! categories, so the first bar is the lowest win rate and the last bar the
//! highest. Renderers that draw top-down walk them in reverse.

use crate::stats::{HandStat, RunMetadata};

pub const X_LABEL: &str = "Win Rate";

/// One horizontal bar: a hand name and its win ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
}

impl ChartBar {
    /// Text drawn on the bar.
    pub fn annotation(&self) -> String {
        format!("{:.4}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WinRateChart {
    title: String,
    bars: Vec<ChartBar>,
}

impl WinRateChart {
    /// `hands` must already be sorted highest win ratio first.
    pub fn new(hands: &[HandStat], metadata: &RunMetadata, num_players: u32) -> Self {
        let bars = hands
            .iter()
            .rev()
            .map(|hand| ChartBar { label: hand.name().to_string(), value: hand.win_ratio() })
            .collect();
        Self { title: chart_title(num_players, metadata), bars }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &'static str {
        X_LABEL
    }

    /// Bottom-to-top.
    pub fn bars(&self) -> &[ChartBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

pub fn chart_title(num_players: u32, metadata: &RunMetadata) -> String {
    format!(
        "Win Rates for Each Hand with {} Players After {} Iterations. Total Hands: {}",
        num_players,
        metadata.iterations(),
        metadata.total_hands()
    )
}
