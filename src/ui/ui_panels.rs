use eframe::egui::{Align, Grid, Layout, ProgressBar, RichText, Ui};
use strum::IntoEnumIterator;

use crate::config::panels::{
    ImpactList, InsightsContent, TradeAction, TradeRow, TradesSummary,
};
use crate::config::plot::PLOT_CONFIG;
use crate::domain::{SessionState, TimeFrame};
use crate::models::{PredictionRecord, PredictionState, TradingPerformance};
use crate::ui::UI_CONFIG;
use crate::ui::styles::{DirectionColor, UiStyleExt, get_outcome_color};
use crate::ui::ui_text::{ICON_DOT, UI_TEXT};
use crate::ui::utils::{format_grouped, format_inr, format_signed_inr, format_signed_pct};
use crate::utils::format_countdown;

/// User actions a panel hands back to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelEvent {
    SelectTimeFrame(TimeFrame),
    EnableDemo,
    OpenExternalChart,
}

pub(crate) trait Panel {
    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent>;
}

// ============================================================================
// Main page
// ============================================================================

pub(crate) struct PredictionCard<'a> {
    pub prediction: &'a PredictionState,
    pub record: &'a PredictionRecord,
}

impl Panel for PredictionCard<'_> {
    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        let p = self.prediction;
        ui.label_subheader(&UI_TEXT.prediction_heading);
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} {}", p.direction.arrow(), p.direction))
                    .size(32.0)
                    .strong()
                    .color(p.direction.color()),
            );
            if p.is_strong() {
                ui.badge(
                    &UI_TEXT.label_strong_signal,
                    p.direction.color(),
                    p.direction.badge_background(),
                );
            }
        });

        ui.add_space(4.0);
        ui.label_subdued(format!("{}: {}%", UI_TEXT.label_confidence, p.confidence));
        ui.add(ProgressBar::new(p.confidence as f32 / 100.0));

        ui.add_space(8.0);
        ui.separator();

        match self.record.last {
            Some(last) => {
                let (text, color) = if last.was_correct {
                    (&UI_TEXT.label_correct, PLOT_CONFIG.color_profit)
                } else {
                    (&UI_TEXT.label_incorrect, PLOT_CONFIG.color_loss)
                };
                ui.horizontal(|ui| {
                    ui.label_subdued(format!("{}:", UI_TEXT.label_last_prediction));
                    ui.label(RichText::new(last.direction.to_string()).color(last.direction.color()));
                    ui.label(RichText::new(text).color(color));
                });
            }
            None => ui.label_subdued(&UI_TEXT.label_awaiting),
        }
        ui.metric(
            &UI_TEXT.label_accuracy,
            &format!("{:.1}%", self.record.accuracy),
            PLOT_CONFIG.color_text_primary,
        );
        Vec::new()
    }
}

pub(crate) struct PerformanceCard<'a> {
    pub performance: &'a TradingPerformance,
}

impl Panel for PerformanceCard<'_> {
    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        let p = self.performance;
        let pnl_color = get_outcome_color(p.today_profit);

        ui.label_subheader(&UI_TEXT.performance_heading);
        ui.add_space(6.0);
        ui.label(
            RichText::new(format_inr(p.current_value))
                .size(28.0)
                .strong()
                .color(PLOT_CONFIG.color_text_primary),
        );
        ui.label(
            RichText::new(format!(
                "{} ({})",
                format_signed_inr(p.today_profit),
                format_signed_pct(p.today_percentage)
            ))
            .color(pnl_color),
        );
        ui.add_space(8.0);
        ui.separator();
        ui.metric(
            &UI_TEXT.label_initial_capital,
            &format_inr(p.initial_capital),
            PLOT_CONFIG.color_text_neutral,
        );
        ui.metric(
            &UI_TEXT.label_today_pnl,
            &format_signed_inr(p.today_profit),
            pnl_color,
        );
        ui.metric(
            &UI_TEXT.label_trades_today,
            &p.trades_count.to_string(),
            PLOT_CONFIG.color_text_neutral,
        );
        Vec::new()
    }
}

pub(crate) struct TimeFrameBar {
    pub selected: TimeFrame,
}

impl Panel for TimeFrameBar {
    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            ui.label_subdued(&UI_TEXT.chart_time_frame);
            for tf in TimeFrame::iter() {
                // Clicking the active frame reseeds it too
                if ui
                    .selectable_label(self.selected == tf, tf.to_string())
                    .clicked()
                {
                    events.push(PanelEvent::SelectTimeFrame(tf));
                }
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(&UI_TEXT.open_chart).clicked() {
                    events.push(PanelEvent::OpenExternalChart);
                }
            });
        });
        events
    }
}

pub(crate) struct MarketClosedPanel<'a> {
    pub session: &'a SessionState,
}

impl Panel for MarketClosedPanel<'_> {
    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        let mut events = Vec::new();
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(
                RichText::new(&UI_TEXT.closed_title).color(PLOT_CONFIG.color_warning),
            );
            ui.add_space(6.0);
            ui.label_subdued(&UI_TEXT.closed_body);
            if let Some(countdown) = self.session.countdown {
                ui.add_space(6.0);
                ui.label(format!(
                    "{} {}",
                    UI_TEXT.closed_next_open,
                    format_countdown(countdown)
                ));
            }
            ui.add_space(12.0);
            if ui.button(&UI_TEXT.closed_view_demo).clicked() {
                events.push(PanelEvent::EnableDemo);
            }
        });
        events
    }
}

// ============================================================================
// Static pages
// ============================================================================

pub(crate) struct AnalysisPanel<'a> {
    pub lists: &'a [ImpactList],
}

impl Panel for AnalysisPanel<'_> {
    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        ui.columns(2, |columns| {
            for (i, list) in self.lists.iter().enumerate() {
                let ui = &mut columns[i % 2];
                UI_CONFIG.card_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label_subheader(list.heading);
                    ui.add_space(4.0);
                    Grid::new(list.heading)
                        .num_columns(3)
                        .striped(true)
                        .spacing([16.0, 6.0])
                        .show(ui, |ui| {
                            for row in list.rows {
                                ui.label(row.title);
                                ui.label_subdued(row.detail.unwrap_or(""));
                                ui.label(
                                    RichText::new(format_signed_pct(row.impact_pct))
                                        .color(get_outcome_color(row.impact_pct)),
                                );
                                ui.end_row();
                            }
                        });
                });
                ui.add_space(8.0);
            }
        });
        Vec::new()
    }
}

pub(crate) struct TradesPanel<'a> {
    pub summary: &'a TradesSummary,
    pub trades: &'a [TradeRow],
}

impl Panel for TradesPanel<'_> {
    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        let s = self.summary;
        ui.horizontal(|ui| {
            ui.metric(
                &UI_TEXT.label_initial_capital,
                &format_inr(s.initial_capital),
                PLOT_CONFIG.color_text_neutral,
            );
            ui.separator();
            ui.metric(
                &UI_TEXT.label_current_value,
                &format_inr(s.current_value),
                PLOT_CONFIG.color_text_primary,
            );
            ui.separator();
            ui.metric(
                &UI_TEXT.label_profit,
                &format!(
                    "{} ({})",
                    format_signed_inr(s.profit()),
                    format_signed_pct(s.profit_pct())
                ),
                get_outcome_color(s.profit()),
            );
        });
        ui.add_space(10.0);
        ui.label_subheader(&UI_TEXT.trades_heading);

        Grid::new("trades_grid")
            .num_columns(UI_TEXT.trades_columns.len())
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for col in UI_TEXT.trades_columns {
                    ui.label(RichText::new(col).strong());
                }
                ui.end_row();

                for t in self.trades {
                    let action_color = match t.action {
                        TradeAction::Buy => PLOT_CONFIG.color_up,
                        TradeAction::Sell => PLOT_CONFIG.color_down,
                    };
                    ui.label(t.time);
                    ui.label(RichText::new(format!("{:?}", t.action).to_uppercase()).color(action_color));
                    ui.label(t.contract);
                    ui.label(format!("{:.2}", t.price));
                    ui.label(t.quantity.to_string());
                    ui.label(
                        RichText::new(format_signed_inr(t.result)).color(get_outcome_color(t.result)),
                    );
                    ui.end_row();
                }
            });
        Vec::new()
    }
}

pub(crate) struct InsightsPanel<'a> {
    pub content: &'a InsightsContent,
}

impl Panel for InsightsPanel<'_> {
    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        let c = self.content;
        ui.columns(3, |columns| {
            // 1. Accuracy
            UI_CONFIG.card_frame().show(&mut columns[0], |ui| {
                ui.label_subheader(&UI_TEXT.insights_accuracy_heading);
                ui.label(RichText::new(format!("{:.1}%", c.accuracy_30d)).size(28.0).strong());
                ui.label(
                    RichText::new(format!(
                        "{} {}",
                        format_signed_pct(c.accuracy_change_wow),
                        UI_TEXT.insights_week_on_week
                    ))
                    .color(get_outcome_color(c.accuracy_change_wow)),
                );
                ui.add_space(6.0);
                for bar in c.accuracy_bars {
                    ui.label_subdued(bar.label);
                    ui.add(
                        ProgressBar::new((bar.pct / 100.0) as f32)
                            .text(format!("{:.0}%", bar.pct)),
                    );
                }
            });

            // 2. Rewards and learning
            UI_CONFIG.card_frame().show(&mut columns[1], |ui| {
                ui.label_subheader(&UI_TEXT.insights_rewards_heading);
                ui.label(
                    RichText::new(format_grouped(c.reward_points as f64, 0))
                        .size(28.0)
                        .strong(),
                );
                ui.label(
                    RichText::new(format!("+{} {}", c.reward_today, UI_TEXT.insights_points_today))
                        .color(PLOT_CONFIG.color_profit),
                );
                ui.add_space(6.0);
                ui.label_subheader(&UI_TEXT.insights_learning_heading);
                for area in c.learning_areas {
                    ui.horizontal(|ui| {
                        ui.label(area.name);
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(RichText::new(format!("+{}", area.points)).color(PLOT_CONFIG.color_info));
                        });
                    });
                }
            });

            // 3. Patterns
            UI_CONFIG.card_frame().show(&mut columns[2], |ui| {
                ui.label_subheader(&UI_TEXT.insights_patterns_heading);
                for pattern in c.patterns {
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(ICON_DOT).color(PLOT_CONFIG.color_up));
                        ui.label(RichText::new(pattern.name).strong());
                    });
                    ui.label_subdued(format!(
                        "{} - {:.0}% {}",
                        pattern.chart, pattern.confidence_pct, UI_TEXT.insights_pattern_confidence
                    ));
                }
            });
        });
        Vec::new()
    }
}
