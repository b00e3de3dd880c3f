use serde::Serialize;
use strum_macros::Display;

use crate::config::PREDICTION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    #[strum(to_string = "UP")]
    Up,
    #[strum(to_string = "DOWN")]
    Down,
}

impl Direction {
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    #[strum(to_string = "STRONG")]
    Strong,
    #[default]
    #[strum(to_string = "WEAK")]
    Weak,
}

/// Latest direction call. Only the newest value is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PredictionState {
    pub direction: Direction,
    /// Percent, 0..=100
    pub confidence: u8,
    pub trend: Trend,
}

impl PredictionState {
    pub fn is_strong(&self) -> bool {
        self.trend == Trend::Strong
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LastPrediction {
    pub direction: Direction,
    pub was_correct: bool,
}

/// Outcome of the previous call plus the running hit rate shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionRecord {
    pub last: Option<LastPrediction>,
    pub accuracy: f64,
}

impl Default for PredictionRecord {
    fn default() -> Self {
        Self {
            last: None,
            accuracy: PREDICTION.record.initial_accuracy,
        }
    }
}
