//! Synthetic chart feed.
//!
//! Both dashboard charts are fed by a `SeriesSource`. The synthetic source
//! seeds a window from a sine wave and then walks it forward one random step
//! per tick.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::config::{GENERATOR, WaveformConfig};
use crate::domain::TimeFrame;
use crate::models::{Series, SeriesPoint};
use crate::utils::centered_random;

/// Anything that can fill and extend a chart window.
/// A live market feed would implement this in place of `SyntheticSource`.
pub trait SeriesSource {
    /// Build a full window for `time_frame` whose newest point is stamped `now`.
    fn initialize(&mut self, time_frame: TimeFrame, now: DateTime<Utc>) -> Series;

    /// Append exactly one point stamped `at`, evicting past the window.
    fn advance(&mut self, series: &mut Series, at: DateTime<Utc>) -> SeriesPoint;
}

pub struct SyntheticSource {
    wave: WaveformConfig,
    rng: StdRng,
}

impl SyntheticSource {
    pub fn new(wave: WaveformConfig, rng: StdRng) -> Self {
        Self { wave, rng }
    }

    pub fn index(rng: StdRng) -> Self {
        Self::new(GENERATOR.index, rng)
    }

    pub fn probability(rng: StdRng) -> Self {
        Self::new(GENERATOR.probability, rng)
    }

    /// Seed value for the point `steps_back` samples before now.
    fn seed_value(&mut self, steps_back: usize) -> f64 {
        let w = self.wave;
        let phase = (steps_back as f64 + w.phase_offset) * w.phase_step;
        let noise = centered_random(&mut self.rng, w.seed_noise);
        w.clamp(w.base + w.amplitude * phase.sin() + noise)
    }
}

impl SeriesSource for SyntheticSource {
    fn initialize(&mut self, time_frame: TimeFrame, now: DateTime<Utc>) -> Series {
        let now_ms = now.timestamp_millis();
        let interval = time_frame.sample_interval_ms();
        let mut series = Series::new(time_frame);

        for steps_back in (0..time_frame.point_count()).rev() {
            let timestamp_ms = now_ms - steps_back as i64 * interval;
            let value = self.seed_value(steps_back);
            series.push(SeriesPoint::new(timestamp_ms, value));
        }
        series
    }

    fn advance(&mut self, series: &mut Series, at: DateTime<Utc>) -> SeriesPoint {
        let from = series.last_value().unwrap_or(self.wave.base);
        let value = self
            .wave
            .clamp(from + centered_random(&mut self.rng, self.wave.walk_step));
        let point = SeriesPoint::new(at.timestamp_millis(), value);
        series.push(point);
        point
    }
}

/// The two series behind the main page charts, always sampled for the same time-frame.
pub struct ChartFeed {
    index_source: Box<dyn SeriesSource>,
    probability_source: Box<dyn SeriesSource>,
    index: Series,
    probability: Series,
}

impl ChartFeed {
    pub fn new(
        mut index_source: Box<dyn SeriesSource>,
        mut probability_source: Box<dyn SeriesSource>,
        time_frame: TimeFrame,
        now: DateTime<Utc>,
    ) -> Self {
        let index = index_source.initialize(time_frame, now);
        let probability = probability_source.initialize(time_frame, now);
        Self {
            index_source,
            probability_source,
            index,
            probability,
        }
    }

    pub fn time_frame(&self) -> TimeFrame {
        self.index.time_frame()
    }

    pub fn index(&self) -> &Series {
        &self.index
    }

    pub fn probability(&self) -> &Series {
        &self.probability
    }

    /// Throw away both windows and reseed them for `time_frame`.
    pub fn reset(&mut self, time_frame: TimeFrame, now: DateTime<Utc>) {
        self.index = self.index_source.initialize(time_frame, now);
        self.probability = self.probability_source.initialize(time_frame, now);
    }

    /// Where the next point lands so spacing stays at the sample interval.
    pub fn next_timestamp_ms(&self) -> Option<i64> {
        self.index
            .last()
            .map(|p| p.timestamp_ms + self.time_frame().sample_interval_ms())
    }

    pub fn advance(&mut self, at: DateTime<Utc>) {
        let _index_point = self.index_source.advance(&mut self.index, at);
        let _probability_point = self.probability_source.advance(&mut self.probability, at);

        #[cfg(debug_assertions)]
        if DF.log_series {
            log::info!(
                "FEED: index {:.2} probability {:.2} ({} pts)",
                _index_point.value,
                _probability_point.value,
                self.index.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn initialize_backfills_evenly_spaced_window() {
        let now = at(1_704_686_400_000);
        let mut source = SyntheticSource::index(rng(1));
        let series = source.initialize(TimeFrame::M5, now);

        assert_eq!(series.len(), 60);
        assert_eq!(series.last().map(|p| p.timestamp_ms), Some(now.timestamp_millis()));
        let stamps: Vec<i64> = series.iter().map(|p| p.timestamp_ms).collect();
        assert!(stamps.windows(2).all(|w| w[1] - w[0] == 5_000));
    }

    #[test]
    fn index_seed_stays_near_wave() {
        let mut source = SyntheticSource::index(rng(2));
        let series = source.initialize(TimeFrame::M1, at(0));
        // newest point is steps_back = 0
        for (steps_back, p) in series.iter().rev().enumerate() {
            let wave = 22_000.0 + 50.0 * (steps_back as f64 * 0.1).sin();
            assert!((p.value - wave).abs() <= 5.0, "{} vs {}", p.value, wave);
        }
    }

    #[test]
    fn probability_seed_is_exact_and_leads_by_five() {
        let mut source = SyntheticSource::probability(rng(3));
        let series = source.initialize(TimeFrame::S10, at(0));
        let newest = series.last_value().unwrap();
        assert!((newest - (50.0 + 30.0 * 0.5_f64.sin())).abs() < 1e-9);
        assert!(series.iter().all(|p| (0.0..=100.0).contains(&p.value)));
    }

    #[test]
    fn walk_steps_are_bounded() {
        let mut source = SyntheticSource::index(rng(4));
        let mut series = source.initialize(TimeFrame::S10, at(0));
        for t in 1..=1_000 {
            let before = series.last_value().unwrap();
            let point = source.advance(&mut series, at(t * 1_000));
            assert!((point.value - before).abs() <= 2.5);
            assert_eq!(series.len(), 10);
        }
    }

    #[test]
    fn probability_walk_never_leaves_bounds() {
        let wave = WaveformConfig {
            base: 99.0,
            walk_step: 20.0,
            ..GENERATOR.probability
        };
        let mut source = SyntheticSource::new(wave, rng(5));
        let mut series = Series::new(TimeFrame::S30);
        for t in 0..5_000 {
            let p = source.advance(&mut series, at(t));
            assert!((0.0..=100.0).contains(&p.value));
        }
    }

    #[test]
    fn empty_series_steps_from_base() {
        let mut source = SyntheticSource::index(rng(6));
        let mut series = Series::new(TimeFrame::M1);
        let p = source.advance(&mut series, at(42));
        assert!((p.value - 22_000.0).abs() <= 2.5);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn feed_reset_switches_both_windows() {
        let mut feed = ChartFeed::new(
            Box::new(SyntheticSource::index(rng(7))),
            Box::new(SyntheticSource::probability(rng(8))),
            TimeFrame::M1,
            at(0),
        );
        assert_eq!(feed.index().len(), 60);

        feed.reset(TimeFrame::S10, at(5_000));
        assert_eq!(feed.time_frame(), TimeFrame::S10);
        assert_eq!(feed.index().len(), 10);
        assert_eq!(feed.probability().len(), 10);
        assert_eq!(feed.probability().time_frame(), TimeFrame::S10);
    }

    #[test]
    fn feed_advances_on_the_sample_grid() {
        let mut feed = ChartFeed::new(
            Box::new(SyntheticSource::index(rng(9))),
            Box::new(SyntheticSource::probability(rng(10))),
            TimeFrame::M5,
            at(100_000),
        );
        for _ in 0..20 {
            let next = feed.next_timestamp_ms().unwrap();
            feed.advance(at(next));
        }
        assert_eq!(feed.next_timestamp_ms(), Some(205_000));
        for series in [feed.index(), feed.probability()] {
            let stamps: Vec<i64> = series.iter().map(|p| p.timestamp_ms).collect();
            assert!(stamps.windows(2).all(|w| w[1] - w[0] == 5_000));
        }
    }
}
