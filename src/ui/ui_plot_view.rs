use std::ops::RangeInclusive;

use chrono::FixedOffset;
use eframe::egui::Ui;
use egui_plot::{GridMark, Plot};

use crate::config::plot::PLOT_CONFIG;
use crate::models::Series;
use crate::ui::UI_TEXT;
use crate::ui::plot_layers::{
    LatestValueLayer, LayerContext, PlotLayer, ReferenceLineLayer, SeriesLineLayer,
};
use crate::ui::utils::format_grouped;
use crate::utils::epoch_ms_to_clock;

/// Which of the two dashboard charts to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChartKind {
    Probability,
    Index,
}

impl ChartKind {
    fn id(self) -> &'static str {
        match self {
            ChartKind::Probability => "probability_plot",
            ChartKind::Index => "index_plot",
        }
    }

    fn layers(self) -> Vec<Box<dyn PlotLayer>> {
        match self {
            ChartKind::Probability => vec![
                Box::new(SeriesLineLayer {
                    name: "Probability",
                    color: PLOT_CONFIG.color_info,
                    fill_to: Some(PLOT_CONFIG.probability_reference as f32),
                }),
                Box::new(ReferenceLineLayer {
                    y: PLOT_CONFIG.probability_reference,
                }),
            ],
            ChartKind::Index => vec![
                Box::new(SeriesLineLayer {
                    name: "NIFTY 50",
                    color: PLOT_CONFIG.line_color,
                    fill_to: None,
                }),
                Box::new(LatestValueLayer),
            ],
        }
    }

    /// Y range the plot must at least show.
    fn y_bounds(self, series: &Series) -> (f64, f64) {
        match self {
            ChartKind::Probability => PLOT_CONFIG.probability_bounds,
            ChartKind::Index => match series.value_range() {
                Some((lo, hi)) => {
                    let pad = ((hi - lo) * PLOT_CONFIG.plot_y_padding_pct).max(1.0);
                    (lo - pad, hi + pad)
                }
                None => (0.0, 1.0),
            },
        }
    }

    fn format_y(self, value: f64) -> String {
        match self {
            ChartKind::Probability => format!("{:.0}%", value),
            ChartKind::Index => format_grouped(value, 0),
        }
    }
}

/// Draw one series chart with exchange-time x labels.
pub(crate) fn show_series_chart(ui: &mut Ui, kind: ChartKind, series: &Series, offset: FixedOffset) {
    crate::trace_time!("Render Chart", 2_000, {
        let (y_min, y_max) = kind.y_bounds(series);
        let layers = kind.layers();
        let ctx = LayerContext { series };

        Plot::new(kind.id())
            .height(PLOT_CONFIG.chart_height)
            .include_y(y_min)
            .include_y(y_max)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_double_click_reset(false)
            .y_axis_label(match kind {
                ChartKind::Probability => UI_TEXT.plot_y_probability.clone(),
                ChartKind::Index => UI_TEXT.plot_y_index.clone(),
            })
            .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                epoch_ms_to_clock((mark.value * 1000.0).round() as i64, offset)
            })
            .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
                kind.format_y(mark.value)
            })
            .label_formatter(move |_name, point| {
                format!(
                    "{}\n{}",
                    epoch_ms_to_clock((point.x * 1000.0).round() as i64, offset),
                    kind.format_y(point.y)
                )
            })
            .show(ui, |plot_ui| {
                for layer in &layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    })
}
