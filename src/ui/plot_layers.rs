use eframe::egui::Color32;
use egui_plot::{HLine, Line, LineStyle, PlotPoints, PlotUi};

use crate::config::plot::PLOT_CONFIG;
use crate::models::Series;

/// Shared data for every layer of one chart.
pub(crate) struct LayerContext<'a> {
    pub series: &'a Series,
}

impl LayerContext<'_> {
    /// Plot x is epoch seconds so the axis formatter can render wall-clock time.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.series
            .iter()
            .map(|p| [p.timestamp_ms as f64 / 1000.0, p.value])
            .collect()
    }
}

pub(crate) trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

/// Main series line, optionally filled down (or up) to a reference level.
pub(crate) struct SeriesLineLayer {
    pub name: &'static str,
    pub color: Color32,
    pub fill_to: Option<f32>,
}

impl PlotLayer for SeriesLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let mut line = Line::new(self.name, PlotPoints::new(ctx.points()))
            .color(self.color)
            .width(PLOT_CONFIG.line_width);
        if let Some(y) = self.fill_to {
            line = line.fill(y);
        }
        plot_ui.line(line);
    }
}

/// Dashed horizontal guide, e.g. the 50% line on the probability chart.
pub(crate) struct ReferenceLineLayer {
    pub y: f64,
}

impl PlotLayer for ReferenceLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, _ctx: &LayerContext) {
        plot_ui.hline(
            HLine::new("", self.y)
                .color(PLOT_CONFIG.reference_line_color)
                .style(LineStyle::Dashed { length: 8.0 })
                .width(1.0),
        );
    }
}

/// Marks the newest value, coloured by its position relative to the window's first value.
pub(crate) struct LatestValueLayer;

impl PlotLayer for LatestValueLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let (Some(first), Some(last)) = (ctx.series.first(), ctx.series.last()) else {
            return;
        };
        let color = if last.value >= first.value {
            PLOT_CONFIG.color_up
        } else {
            PLOT_CONFIG.color_down
        };
        plot_ui.hline(
            HLine::new("Latest", last.value)
                .color(color)
                .width(1.0)
                .style(LineStyle::dashed_loose()),
        );
    }
}
