mod core;
mod generator;
mod performance;
mod prediction;
mod scheduler;

pub use core::{DashboardEngine, EngineOptions, TickReport};
pub use generator::{ChartFeed, SeriesSource, SyntheticSource};
pub use performance::PerformanceSimulator;
pub use prediction::{PredictionDeriver, PredictionTracker};
pub use scheduler::{PeriodicTask, Scheduler, TaskId};
