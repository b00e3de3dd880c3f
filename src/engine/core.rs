use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::{SeedableRng, rngs::StdRng};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::config::MARKET;

use crate::domain::{SessionClock, SessionState, TimeFrame};
use crate::models::{
    DashboardSnapshot, PredictionRecord, PredictionState, Series, TradingPerformance,
};
use crate::utils::format_clock;

use super::generator::{ChartFeed, SeriesSource, SyntheticSource};
use super::performance::PerformanceSimulator;
use super::prediction::{PredictionDeriver, PredictionTracker};
use super::scheduler::{Scheduler, TaskId};

/// Start-up choices for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    pub demo: bool,
    pub time_frame: TimeFrame,
    /// Fixed seed for reproducible runs. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

/// What a single `tick` touched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    pub session_evaluated: bool,
    pub session_changed: bool,
    pub clock_refreshed: bool,
    pub series_advanced: bool,
    /// Both windows were rebuilt ending at `now` instead of advanced.
    pub series_reseeded: bool,
    pub prediction_refreshed: bool,
    pub trade: Option<f64>,
}

impl TickReport {
    pub fn changed(&self) -> bool {
        self.session_evaluated
            || self.clock_refreshed
            || self.series_advanced
            || self.series_reseeded
            || self.prediction_refreshed
            || self.trade.is_some()
    }
}

/// Independent RNG stream per consumer so one seed gives reproducible, uncorrelated streams.
fn make_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s.wrapping_add(stream)),
        None => StdRng::from_entropy(),
    }
}

pub struct DashboardEngine {
    clock: SessionClock,
    session: SessionState,

    feed: ChartFeed,

    deriver: PredictionDeriver,
    prediction: PredictionState,
    tracker: PredictionTracker,

    performance: PerformanceSimulator,

    scheduler: Scheduler,

    demo: bool,
    /// `can_advance` as of the last tick.
    gate_open: bool,
    clock_text: String,
    last_tick_ms: i64,
}

impl DashboardEngine {
    pub fn new(options: EngineOptions, now: DateTime<Utc>) -> Self {
        let index = Box::new(SyntheticSource::index(make_rng(options.seed, 0)));
        let probability = Box::new(SyntheticSource::probability(make_rng(options.seed, 1)));
        Self::with_sources(options, now, index, probability)
    }

    /// Build around caller-provided chart sources.
    pub fn with_sources(
        options: EngineOptions,
        now: DateTime<Utc>,
        index_source: Box<dyn SeriesSource>,
        probability_source: Box<dyn SeriesSource>,
    ) -> Self {
        let clock = SessionClock::new(&MARKET);
        let session = clock.evaluate(now);
        let clock_text = format_clock(clock.local(now));

        // 1. Both series are seeded immediately, market open or not
        let feed = ChartFeed::new(index_source, probability_source, options.time_frame, now);

        // 2. Arm every task
        let now_ms = now.timestamp_millis();
        let mut scheduler = Scheduler::new(options.time_frame);
        scheduler.start_all(now_ms);
        // Window already ends at `now`
        scheduler.start_after(TaskId::Series, now_ms);

        #[cfg(debug_assertions)]
        if DF.log_session {
            log::info!(
                "ENGINE: started ({}, demo {}, market {})",
                options.time_frame,
                options.demo,
                if session.is_open { "OPEN" } else { "CLOSED" }
            );
        }

        Self {
            clock,
            session,
            feed,
            deriver: PredictionDeriver::default(),
            prediction: PredictionState::default(),
            tracker: PredictionTracker::new(make_rng(options.seed, 2)),
            performance: PerformanceSimulator::new(make_rng(options.seed, 3)),
            scheduler,
            demo: options.demo,
            gate_open: options.demo || session.is_open,
            clock_text,
            last_tick_ms: now_ms,
        }
    }

    /// Run every task that is due at `now`, in dashboard order.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickReport {
        crate::trace_time!("Engine Tick", 500, {
            let now_ms = now.timestamp_millis();
            self.last_tick_ms = now_ms;
            let mut report = TickReport::default();

            if self.scheduler.poll(TaskId::Session, now_ms) {
                report.session_evaluated = true;
                report.session_changed = self.refresh_session(now);
            }

            if self.scheduler.poll(TaskId::DisplayClock, now_ms) {
                self.clock_text = format_clock(self.clock.local(now));
                report.clock_refreshed = true;
            }

            // Tasks keep their cadence while gated; a gated firing is a no-op.
            let gate = self.can_advance();

            // A window frozen while gated is stale once the gate reopens.
            if gate && !self.gate_open {
                self.reseed_series(now);
                report.series_reseeded = true;
            }
            self.gate_open = gate;

            if self.scheduler.poll(TaskId::Series, now_ms) && gate {
                if self.advance_series(now) {
                    report.series_advanced = true;
                } else {
                    report.series_reseeded = true;
                }
            }

            if self.scheduler.poll(TaskId::Prediction, now_ms) && gate {
                self.prediction = self.deriver.derive(now);
                self.tracker.update();
                report.prediction_refreshed = true;
            }

            if self.scheduler.poll(TaskId::Performance, now_ms) && gate {
                report.trade = self.performance.step();
            }

            report
        })
    }

    /// Append one point on the sample grid. A window more than one interval
    /// behind `now` is reseeded instead. Returns false when it reseeded.
    fn advance_series(&mut self, now: DateTime<Utc>) -> bool {
        let now_ms = now.timestamp_millis();
        let interval = self.feed.time_frame().sample_interval_ms();

        let on_grid = self
            .feed
            .next_timestamp_ms()
            .filter(|&next| next <= now_ms && now_ms - next < interval)
            .and_then(DateTime::<Utc>::from_timestamp_millis);

        match on_grid {
            Some(at) => {
                self.feed.advance(at);
                true
            }
            None => {
                self.reseed_series(now);
                false
            }
        }
    }

    /// Rebuild both windows ending at `now` and restart the series timer from there.
    fn reseed_series(&mut self, now: DateTime<Utc>) {
        let now_ms = now.timestamp_millis();
        self.feed.reset(self.feed.time_frame(), now);
        self.scheduler.start_after(TaskId::Series, now_ms);

        #[cfg(debug_assertions)]
        if DF.log_series {
            log::info!("FEED: reseeded at {}", self.clock.local(now));
        }
    }

    /// Re-evaluate the session. Returns true on an open/close transition.
    fn refresh_session(&mut self, now: DateTime<Utc>) -> bool {
        let next = self.clock.evaluate(now);
        let transitioned = next.is_open != self.session.is_open;

        #[cfg(debug_assertions)]
        if transitioned && DF.log_session {
            log::info!(
                "SESSION: market {} at {}",
                if next.is_open { "OPENED" } else { "CLOSED" },
                self.clock.local(now)
            );
        }

        self.session = next;
        transitioned
    }

    /// Reseed both series for `time_frame` and move the series timer to its interval.
    /// Selecting the current frame again also resets.
    pub fn set_time_frame(&mut self, time_frame: TimeFrame, now: DateTime<Utc>) {
        let now_ms = now.timestamp_millis();

        self.scheduler.cancel(TaskId::Series);
        self.feed.reset(time_frame, now);
        self.scheduler
            .set_period(TaskId::Series, time_frame.sample_interval_ms());
        self.scheduler.start_after(TaskId::Series, now_ms);

        #[cfg(debug_assertions)]
        if DF.log_controls {
            log::info!(
                "CONTROLS: time-frame -> {} ({} pts @ {}ms)",
                time_frame,
                time_frame.point_count(),
                time_frame.sample_interval_ms()
            );
        }
    }

    pub fn set_demo(&mut self, on: bool) {
        #[cfg(debug_assertions)]
        if DF.log_controls && on != self.demo {
            log::info!("CONTROLS: demo mode {}", if on { "ON" } else { "OFF" });
        }
        self.demo = on;
    }

    pub fn toggle_demo(&mut self) {
        self.set_demo(!self.demo);
    }

    /// Series, prediction and performance only move while this holds.
    pub fn can_advance(&self) -> bool {
        self.demo || self.session.is_open
    }

    pub fn is_demo(&self) -> bool {
        self.demo
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn prediction(&self) -> &PredictionState {
        &self.prediction
    }

    pub fn record(&self) -> &PredictionRecord {
        self.tracker.record()
    }

    pub fn performance(&self) -> &TradingPerformance {
        self.performance.performance()
    }

    pub fn time_frame(&self) -> TimeFrame {
        self.feed.time_frame()
    }

    pub fn index_series(&self) -> &Series {
        self.feed.index()
    }

    pub fn probability_series(&self) -> &Series {
        self.feed.probability()
    }

    /// `Last updated` text, exchange time.
    pub fn clock_text(&self) -> &str {
        &self.clock_text
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn until_next_due(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.scheduler.until_next_due(now.timestamp_millis())
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            timestamp_ms: self.last_tick_ms,
            clock: self.clock_text.clone(),
            time_frame: self.time_frame(),
            demo: self.demo,
            session: (&self.session).into(),
            prediction: self.prediction,
            record: *self.record(),
            performance: *self.performance(),
            index: self.index_series().last_value(),
            probability: self.probability_series().last_value(),
            index_len: self.index_series().len(),
            probability_len: self.probability_series().len(),
        }
    }
}
