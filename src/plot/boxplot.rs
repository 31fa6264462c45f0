//! Box plots of final scores across a parameter sweep.
//!
//! Every (parameter, piece count) combination gets one box per distinct
//! parameter value. All traces are created up front and hidden; a single
//! dropdown switches which combination is visible.

use plotly::box_plot::BoxPoints;
use plotly::common::{Anchor, Font, Visible};
use plotly::layout::update_menu::{Button, ButtonMethod, UpdateMenu, UpdateMenuDirection};
use plotly::{BoxPlot, Plot};
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

use super::table::{ParamValue, ScoredRun, SweepRecord};
use super::theme::themed_layout;

const SUBTITLE: &str = "Select parameter and number of pieces";

/// One box before it is turned into a trace.
struct BoxData {
    name: String,
    scores: Vec<f64>,
    hover: String,
}

/// Traces belonging to one dropdown entry.
#[derive(Debug, Clone, PartialEq)]
struct TraceGroup {
    label: String,
    traces: Range<usize>,
}

/// Build the box-plot chart for `runs`, offering `parameters` in the dropdown.
///
/// Returns a chart without traces or menu when `runs` is empty.
pub fn build_boxplot<R: SweepRecord>(runs: &[ScoredRun<R>], parameters: &[R::Param], title: &str) -> Plot {
    let piece_counts: BTreeSet<u32> = runs.iter().map(|r| r.run.pieces()).collect();

    let mut boxes = Vec::new();
    let mut groups = Vec::new();

    for &param in parameters {
        for &pieces in &piece_counts {
            let mut by_value: BTreeMap<ParamValue, Vec<f64>> = BTreeMap::new();
            for scored in runs.iter().filter(|r| r.run.pieces() == pieces) {
                by_value.entry(scored.run.param_value(param)).or_default().push(scored.score);
            }

            let start = boxes.len();
            for (value, scores) in by_value {
                boxes.push(BoxData {
                    hover: format!("{}={}<br>Score: %{{y:.2f}}<extra></extra>", param, value.display),
                    name: value.display,
                    scores,
                });
            }

            groups.push(TraceGroup {
                label: format!("{} | NP={}", param, pieces),
                traces: start..boxes.len(),
            });
        }
    }

    let layout = themed_layout(
        &format!("{}<br><sub>{}</sub>", title, SUBTITLE),
        "Parameter Value",
        "Final Best Fitness Score",
    )
    .show_legend(false);

    let mut plot = Plot::new();
    let Some(first) = groups.first() else {
        log::debug!("No runs to plot for '{}'", title);
        plot.set_layout(layout);
        return plot;
    };

    let trace_count = boxes.len();
    for (i, data) in boxes.into_iter().enumerate() {
        let visible = if first.traces.contains(&i) { Visible::True } else { Visible::False };
        plot.add_trace(
            BoxPlot::<f64, f64>::new(data.scores)
                .name(data.name.as_str())
                .visible(visible)
                .box_points(BoxPoints::All)
                .hover_template(data.hover.as_str()),
        );
    }

    let buttons: Vec<Button> = groups
        .iter()
        .map(|group| {
            let visible: Vec<bool> = (0..trace_count).map(|i| group.traces.contains(&i)).collect();
            Button::new()
                .label(group.label.as_str())
                .method(ButtonMethod::Update)
                .args(json!([{ "visible": visible }]))
        })
        .collect();

    let menu = UpdateMenu::new()
        .buttons(buttons)
        .direction(UpdateMenuDirection::Down)
        .show_active(true)
        .active(0)
        .x(1.0)
        .x_anchor(Anchor::Left)
        .y(1.0)
        .y_anchor(Anchor::Top)
        .background_color("lightgray")
        .border_color("gray")
        .font(Font::new().size(12).color("black"));

    plot.set_layout(layout.update_menus(vec![menu]));
    plot
}
