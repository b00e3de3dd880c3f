use chrono::{DateTime, Timelike, Utc};
use rand::{Rng, rngs::StdRng};

use crate::config::{PREDICTION, PredictionConfig};
use crate::models::{Direction, LastPrediction, PredictionRecord, PredictionState, Trend};

/// Turns the current second into a direction call.
/// Deliberately independent of the chart series.
pub struct PredictionDeriver {
    config: &'static PredictionConfig,
}

impl Default for PredictionDeriver {
    fn default() -> Self {
        Self::new(&PREDICTION)
    }
}

impl PredictionDeriver {
    pub fn new(config: &'static PredictionConfig) -> Self {
        Self { config }
    }

    pub fn derive(&self, now: DateTime<Utc>) -> PredictionState {
        let c = self.config;
        let oscillation = (now.second() as f64 * c.oscillation_rate).sin();

        let direction = if oscillation > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };

        let (lo, hi) = c.confidence_bounds;
        let confidence = (c.base_confidence + c.confidence_amplitude * oscillation.abs())
            .round()
            .clamp(lo, hi);

        let trend = if confidence > c.strong_threshold {
            Trend::Strong
        } else {
            Trend::Weak
        };

        PredictionState {
            direction,
            confidence: confidence as u8,
            trend,
        }
    }
}

/// Scores the previous call and drifts the running accuracy.
pub struct PredictionTracker {
    config: &'static PredictionConfig,
    rng: StdRng,
    record: PredictionRecord,
}

impl PredictionTracker {
    pub fn new(rng: StdRng) -> Self {
        Self {
            config: &PREDICTION,
            rng,
            record: PredictionRecord::default(),
        }
    }

    pub fn record(&self) -> &PredictionRecord {
        &self.record
    }

    pub fn update(&mut self) -> &PredictionRecord {
        let rc = &self.config.record;

        let was_correct = self.rng.gen_bool(rc.correct_probability);
        let direction = if self.rng.gen_bool(0.5) {
            Direction::Up
        } else {
            Direction::Down
        };
        self.record.last = Some(LastPrediction {
            direction,
            was_correct,
        });

        if self.rng.gen_bool(rc.drift_probability) {
            let coin = self.rng.gen_bool(0.5);
            let delta = match (was_correct, coin) {
                (true, true) => rc.drift_large,
                (true, false) => -rc.drift_small,
                (false, true) => -rc.drift_large,
                (false, false) => rc.drift_small,
            };
            let (lo, hi) = rc.accuracy_bounds;
            self.record.accuracy = (self.record.accuracy + delta).clamp(lo, hi);
        }
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn at_second(second: i64) -> DateTime<Utc> {
        // 2024-01-08 04:00:00 UTC, second 0
        DateTime::from_timestamp(1_704_686_400 + second, 0).unwrap()
    }

    #[test]
    fn top_of_minute_is_down_and_weak() {
        let p = PredictionDeriver::default().derive(at_second(0));
        assert_eq!(p.direction, Direction::Down);
        assert_eq!(p.confidence, 65);
        assert_eq!(p.trend, Trend::Weak);
    }

    #[test]
    fn second_sixteen_is_strong_up() {
        // sin(1.6) ~ 0.9996
        let p = PredictionDeriver::default().derive(at_second(16));
        assert_eq!(p.direction, Direction::Up);
        assert_eq!(p.confidence, 95);
        assert!(p.is_strong());
    }

    #[test]
    fn direction_flips_after_pi() {
        let d = PredictionDeriver::default();
        assert_eq!(d.derive(at_second(31)).direction, Direction::Up);
        assert_eq!(d.derive(at_second(32)).direction, Direction::Down);
    }

    #[test]
    fn every_second_of_the_minute() {
        let d = PredictionDeriver::default();
        for s in 0..60 {
            let p = d.derive(at_second(s));
            assert!((50..=95).contains(&p.confidence), "second {s}");
            assert_eq!(p.is_strong(), p.confidence > 80, "second {s}");
            let osc = (s as f64 * 0.1).sin();
            assert_eq!(p.direction == Direction::Up, osc > 0.0, "second {s}");
        }
    }

    #[test]
    fn accuracy_stays_in_band() {
        let mut tracker = PredictionTracker::new(StdRng::seed_from_u64(11));
        let mut seen_last = false;
        for _ in 0..20_000 {
            let record = tracker.update();
            seen_last |= record.last.is_some();
            assert!((65.0..=92.0).contains(&record.accuracy));
        }
        assert!(seen_last);
    }

    #[test]
    fn accuracy_eventually_moves() {
        let mut tracker = PredictionTracker::new(StdRng::seed_from_u64(12));
        let moved = (0..1_000)
            .map(|_| tracker.update().accuracy)
            .any(|a| a != 78.0);
        assert!(moved);
    }
}
