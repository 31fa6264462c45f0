//! Fitness-vs-generation line plots, one trace per run.

use std::collections::BTreeMap;

use plotly::common::{Anchor, LegendGroupTitle, Line, Mode};
use plotly::layout::{HoverMode, Legend};
use plotly::{Layout, Plot, Scatter};

use super::colors::color_for_pieces;
use super::theme::themed_layout;
use crate::experiment::{GaRun, GaSeries, SaRun, SaSeries};

const HOVER_TEMPLATE: &str = "Generation: %{x}<br>Best Fitness: %{y:.2f}<extra></extra>";

/// The line of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunLine {
    pub name: String,
    pub pieces: u32,
    pub generations: Vec<u64>,
    pub fitness: Vec<f64>,
}

impl RunLine {
    pub fn from_ga(run: &GaRun, series: &GaSeries) -> Self {
        Self {
            name: run.label(),
            pieces: run.pieces,
            generations: series.generations(),
            fitness: series.fitness(),
        }
    }

    /// Uses the accepted-move series; best-score checkpoints are not merged in.
    pub fn from_sa(run: &SaRun, series: &SaSeries) -> Self {
        Self {
            name: run.label(),
            pieces: run.pieces,
            generations: series.generations(),
            fitness: series.fitness(),
        }
    }
}

/// Plot every run as its own line, in input order.
pub fn build_line_plot(lines: &[RunLine], title: &str) -> Plot {
    let mut plot = Plot::new();
    for line in lines {
        plot.add_trace(scatter(line));
    }
    plot.set_layout(line_layout(title));
    plot
}

/// Plot runs grouped by piece count (ascending), colored per group, with one
/// legend group per piece count.
pub fn build_line_plot_by_pieces(lines: &[RunLine], title: &str) -> Plot {
    let mut grouped: BTreeMap<u32, Vec<&RunLine>> = BTreeMap::new();
    for line in lines {
        grouped.entry(line.pieces).or_default().push(line);
    }

    let mut plot = Plot::new();
    for (pieces, group) in grouped {
        let legend_group = format!("{} pieces", pieces);
        let color = color_for_pieces(pieces);

        for (idx, line) in group.into_iter().enumerate() {
            let mut trace = scatter(line)
                .legend_group(legend_group.as_str())
                .line(Line::new().color(color));
            if idx == 0 {
                trace = trace.legend_group_title(LegendGroupTitle::with_text(format!("{} Pieces", pieces)));
            }
            plot.add_trace(trace);
        }
    }
    plot.set_layout(line_layout(title));
    plot
}

fn scatter(line: &RunLine) -> Box<Scatter<u64, f64>> {
    Scatter::new(line.generations.clone(), line.fitness.clone())
        .mode(Mode::Lines)
        .name(line.name.as_str())
        .hover_template(HOVER_TEMPLATE)
}

fn line_layout(title: &str) -> Layout {
    themed_layout(title, "Generation", "Best Fitness")
        .hover_mode(HoverMode::Closest)
        .legend(
            Legend::new()
                .x(1.01)
                .x_anchor(Anchor::Left)
                .y(0.99)
                .y_anchor(Anchor::Top),
        )
}
