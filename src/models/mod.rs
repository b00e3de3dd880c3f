mod performance;
mod prediction;
mod series;
mod snapshot;

pub use performance::TradingPerformance;
pub use prediction::{Direction, LastPrediction, PredictionRecord, PredictionState, Trend};
pub use series::{Series, SeriesPoint};
pub use snapshot::{DashboardSnapshot, SessionSnapshot};
