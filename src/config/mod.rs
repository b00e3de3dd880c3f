//! Configuration module for the dashboard.

// Can all be private now because we have a public re-export.
mod chart_embed;
mod debug;
mod generator;
mod market;
mod performance;
mod prediction;
mod schedule;
mod ticker;

// Can't be private because we don't re-export everything in them
pub mod panels;
pub mod plot;

// Re-export commonly used items
pub use chart_embed::{CHART_EMBED, ChartEmbedConfig};
pub use debug::DF;
pub use generator::{GENERATOR, GeneratorConfig, WaveformConfig};
pub use market::{MARKET, MarketConfig};
pub use performance::{PERFORMANCE, PerformanceConfig};
pub use prediction::{PREDICTION, PredictionConfig, PredictionRecordConfig};
pub use schedule::{SCHEDULE, ScheduleConfig};
pub use ticker::TICKER;
