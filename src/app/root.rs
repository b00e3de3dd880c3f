use {
    chrono::{DateTime, Utc},
    eframe::{
        Frame,
        egui::{Context, Key},
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::{
    Cli,
    app::Page,
    engine::{DashboardEngine, EngineOptions},
    ui::{ExternalChartLink, TickerState, setup_custom_visuals},
    utils::TimeUtils,
};

pub struct DashboardApp {
    pub(crate) engine: DashboardEngine,
    pub(crate) page: Page,
    pub(crate) ticker_state: TickerState,
    pub(crate) chart_link: ExternalChartLink,
}

impl DashboardApp {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let options = EngineOptions {
            demo: args.demo,
            time_frame: args.time_frame,
            seed: None,
        };

        #[cfg(debug_assertions)]
        if DF.log_controls {
            log::info!(
                "APP: starting with time-frame {} (demo {})",
                options.time_frame,
                options.demo
            );
        }

        Self {
            engine: DashboardEngine::new(options, TimeUtils::now_utc()),
            page: Page::default(),
            ticker_state: TickerState::default(),
            chart_link: ExternalChartLink::default(),
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context, now: DateTime<Utc>) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (mut toggle_demo, mut page, mut reset_frame) = (false, None, false);
        ctx.input(|i| {
            if i.key_pressed(Key::D) {
                toggle_demo = true;
            }
            if i.key_pressed(Key::R) {
                reset_frame = true;
            }
            if i.key_pressed(Key::Num1) {
                page = Some(Page::Main);
            }
            if i.key_pressed(Key::Num2) {
                page = Some(Page::Analysis);
            }
            if i.key_pressed(Key::Num3) {
                page = Some(Page::Trades);
            }
            if i.key_pressed(Key::Num4) {
                page = Some(Page::Insights);
            }
        });

        if toggle_demo {
            self.engine.toggle_demo();
        }
        if reset_frame {
            let tf = self.engine.time_frame();
            self.engine.set_time_frame(tf, now);
        }
        if let Some(p) = page {
            self.page = p;
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = TimeUtils::now_utc();

        // 1. Timers
        self.engine.tick(now);

        // 2. Input and layout. Panels must be added before the central panel.
        self.handle_global_shortcuts(ctx, now);
        self.render_top_panel(ctx);
        self.render_ticker_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx, now);

        // 3. Side effects requested during layout
        self.chart_link.open_pending(ctx);

        // 4. Wake up for the next due task even if nothing else repaints
        if let Some(wait) = self.engine.until_next_due(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
