#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the simulate binary and tests)
pub use app::DashboardApp;
pub use domain::{SessionClock, SessionState, TimeFrame};
pub use engine::{DashboardEngine, EngineOptions, TickReport};
pub use models::DashboardSnapshot;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Keep charts and predictions moving while the market is closed
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Initial chart window
    #[arg(long, value_enum, default_value_t = TimeFrame::M1)]
    pub time_frame: TimeFrame,
}

/// Main application entry point - creates the GUI app.
/// Shared by the native binary and the wasm start hook.
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> DashboardApp {
    DashboardApp::new(cc, args)
}
