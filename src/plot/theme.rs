//! Dark styling shared by every chart.

use plotly::Layout;
use plotly::common::{Font, Title};
use plotly::layout::Axis;

/// Page background.
pub const PAPER_BACKGROUND: &str = "#56609b";
/// Plot area background.
pub const PLOT_BACKGROUND: &str = "#3d4570";
pub const FONT_COLOR: &str = "white";
pub const GRID_COLOR: &str = "#5b6394";
pub const FIGURE_WIDTH: usize = 1200;
pub const FIGURE_HEIGHT: usize = 700;

/// Dark layout with titled axes.
pub fn themed_layout(title: &str, x_axis_title: &str, y_axis_title: &str) -> Layout {
    Layout::new()
        .title(Title::with_text(title))
        .x_axis(axis(x_axis_title))
        .y_axis(axis(y_axis_title))
        .width(FIGURE_WIDTH)
        .height(FIGURE_HEIGHT)
        .paper_background_color(PAPER_BACKGROUND)
        .plot_background_color(PLOT_BACKGROUND)
        .font(Font::new().color(FONT_COLOR))
}

fn axis(title: &str) -> Axis {
    Axis::new().title(Title::with_text(title)).grid_color(GRID_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotly::Plot;
    use serde_json::Value;

    #[test]
    fn layout_carries_dark_colors_and_axis_titles() {
        let mut plot = Plot::new();
        plot.set_layout(themed_layout("Title", "Generation", "Best Fitness"));
        let value: Value = serde_json::from_str(&plot.to_json()).unwrap();
        let layout = &value["layout"];

        assert_eq!(layout["title"]["text"], "Title");
        assert_eq!(layout["paper_bgcolor"], PAPER_BACKGROUND);
        assert_eq!(layout["plot_bgcolor"], PLOT_BACKGROUND);
        assert_eq!(layout["xaxis"]["title"]["text"], "Generation");
        assert_eq!(layout["yaxis"]["gridcolor"], GRID_COLOR);
        assert_eq!(layout["width"], 1200);
        assert!(layout.get("updatemenus").is_none());
    }
}
