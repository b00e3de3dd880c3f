use serde::Serialize;

use crate::domain::{SessionState, TimeFrame};
use crate::utils::format_countdown;

use super::performance::TradingPerformance;
use super::prediction::{PredictionRecord, PredictionState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub is_open: bool,
    /// RFC 3339, exchange offset
    pub next_open: String,
    pub countdown_secs: Option<i64>,
    pub countdown_text: Option<String>,
}

impl From<&SessionState> for SessionSnapshot {
    fn from(state: &SessionState) -> Self {
        Self {
            is_open: state.is_open,
            next_open: state.next_open.to_rfc3339(),
            countdown_secs: state.countdown.map(|d| d.num_seconds()),
            countdown_text: state.countdown.map(format_countdown),
        }
    }
}

/// Everything the dashboard displays for one tick, in a serializable form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub timestamp_ms: i64,
    pub clock: String,
    pub time_frame: TimeFrame,
    pub demo: bool,
    pub session: SessionSnapshot,
    pub prediction: PredictionState,
    pub record: PredictionRecord,
    pub performance: TradingPerformance,
    pub index: Option<f64>,
    pub probability: Option<f64>,
    pub index_len: usize,
    pub probability_len: usize,
}
