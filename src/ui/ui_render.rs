use chrono::{DateTime, Utc};
use eframe::egui::{
    Align, CentralPanel, Context, FontId, Layout, RichText, ScrollArea, TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::app::{DashboardApp, Page};
use crate::config::panels::PANELS;
use crate::config::plot::PLOT_CONFIG;
use crate::config::{CHART_EMBED, MARKET, TICKER};
use crate::domain::SessionState;
use crate::ui::UI_CONFIG;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    AnalysisPanel, InsightsPanel, MarketClosedPanel, Panel, PanelEvent, PerformanceCard,
    PredictionCard, TimeFrameBar, TradesPanel,
};
use crate::ui::ui_plot_view::{ChartKind, show_series_chart};
use crate::ui::ui_text::{ICON_DOT, UI_TEXT};
use crate::utils::format_countdown;

impl DashboardApp {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();
        let mut toggle_demo = false;

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Title
                    ui.label(
                        RichText::new(&UI_TEXT.app_title)
                            .size(18.0)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();

                    // 2. Pages
                    for page in Page::iter() {
                        if ui
                            .interactive_label(
                                page.label(),
                                self.page == page,
                                UI_CONFIG.colors.label,
                                FontId::proportional(14.0),
                            )
                            .clicked()
                        {
                            self.page = page;
                        }
                    }

                    // 3. Right side: session status and demo toggle
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let demo_text = if self.engine.is_demo() {
                            &UI_TEXT.demo_on
                        } else {
                            &UI_TEXT.demo_off
                        };
                        toggle_demo = ui.button(demo_text).clicked();
                        ui.separator();
                        render_session_status(ui, self.engine.session());
                    });
                });
            });

        if toggle_demo {
            self.engine.toggle_demo();
        }
    }

    pub(crate) fn render_ticker_panel(&mut self, ctx: &Context) {
        let panel_frame = UI_CONFIG.bottom_panel_frame();

        // Called before the status panel, so it sits underneath it
        TopBottomPanel::bottom("ticker_panel")
            .frame(panel_frame)
            .min_height(TICKER.height)
            .resizable(false)
            .show(ctx, |ui| {
                self.ticker_state.update_data(&self.engine);
                if self.ticker_state.render(ui) {
                    self.chart_link.request(&CHART_EMBED);
                }
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Live / Demo
                    let (mode, color) = if self.engine.is_demo() {
                        (&UI_TEXT.footer_demo, PLOT_CONFIG.color_warning)
                    } else {
                        (&UI_TEXT.footer_live, PLOT_CONFIG.color_up)
                    };
                    ui.label(RichText::new(mode).small().strong().color(color));
                    ui.separator();

                    // 2. Clock
                    ui.label_subdued(format!(
                        "{}: {} IST",
                        UI_TEXT.footer_last_updated,
                        self.engine.clock_text()
                    ));
                    ui.separator();

                    // 3. Window
                    let tf = self.engine.time_frame();
                    ui.label_subdued(format!(
                        "{} {} ({} pts)",
                        MARKET.display_name,
                        tf,
                        self.engine.index_series().len()
                    ));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(&UI_TEXT.footer_disclaimer);
                    });
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context, now: DateTime<Utc>) {
        let central_panel_frame = UI_CONFIG.central_panel_frame();
        let mut events = Vec::new();

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    events = match self.page {
                        Page::Main => self.render_main_page(ui),
                        Page::Analysis => AnalysisPanel {
                            lists: PANELS.analysis,
                        }
                        .render(ui),
                        Page::Trades => TradesPanel {
                            summary: &PANELS.trades_summary,
                            trades: PANELS.trades,
                        }
                        .render(ui),
                        Page::Insights => InsightsPanel {
                            content: &PANELS.insights,
                        }
                        .render(ui),
                    };
                });
            });

        self.handle_panel_events(events, now);
    }

    fn render_main_page(&self, ui: &mut Ui) -> Vec<PanelEvent> {
        let mut events = Vec::new();

        // 1. Cards
        ui.columns(2, |columns| {
            UI_CONFIG.card_frame().show(&mut columns[0], |ui| {
                ui.set_min_width(UI_CONFIG.card_min_width.min(ui.available_width()));
                events.extend(
                    PredictionCard {
                        prediction: self.engine.prediction(),
                        record: self.engine.record(),
                    }
                    .render(ui),
                );
            });
            UI_CONFIG.card_frame().show(&mut columns[1], |ui| {
                ui.set_min_width(UI_CONFIG.card_min_width.min(ui.available_width()));
                events.extend(
                    PerformanceCard {
                        performance: self.engine.performance(),
                    }
                    .render(ui),
                );
            });
        });
        ui.add_space(12.0);

        // 2. Charts, or the closed-market notice
        if !self.engine.can_advance() {
            UI_CONFIG.card_frame().show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                events.extend(
                    MarketClosedPanel {
                        session: self.engine.session(),
                    }
                    .render(ui),
                );
            });
            return events;
        }

        let offset = self.engine.session_clock().offset();
        UI_CONFIG.card_frame().show(ui, |ui| {
            events.extend(
                TimeFrameBar {
                    selected: self.engine.time_frame(),
                }
                .render(ui),
            );
            ui.add_space(6.0);
            ui.label_subheader(&UI_TEXT.chart_probability_heading);
            show_series_chart(
                ui,
                ChartKind::Probability,
                self.engine.probability_series(),
                offset,
            );
            ui.add_space(10.0);
            ui.label_subheader(&UI_TEXT.chart_index_heading);
            show_series_chart(ui, ChartKind::Index, self.engine.index_series(), offset);
        });
        events
    }

    fn handle_panel_events(&mut self, events: Vec<PanelEvent>, now: DateTime<Utc>) {
        for event in events {
            match event {
                PanelEvent::SelectTimeFrame(tf) => self.engine.set_time_frame(tf, now),
                PanelEvent::EnableDemo => self.engine.set_demo(true),
                PanelEvent::OpenExternalChart => self.chart_link.request(&CHART_EMBED),
            }
        }
    }
}

/// Right-to-left: dot, status, countdown.
fn render_session_status(ui: &mut Ui, session: &SessionState) {
    let color = if session.is_open {
        PLOT_CONFIG.color_up
    } else {
        PLOT_CONFIG.color_down
    };
    ui.label(RichText::new(ICON_DOT).color(color));
    if session.is_open {
        ui.label(RichText::new(&UI_TEXT.market_open).color(color));
        return;
    }
    ui.label(RichText::new(&UI_TEXT.market_closed).color(color));
    if let Some(countdown) = session.countdown {
        ui.label_subdued(format!(
            "{} {}",
            UI_TEXT.opens_in,
            format_countdown(countdown)
        ));
    }
}
