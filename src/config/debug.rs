//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Session open/close transitions
    pub log_session: bool,
    /// Every appended series point (noisy)
    pub log_series: bool,
    /// Time-frame resets and demo toggles
    pub log_controls: bool,
    /// Simulated trades
    pub log_trades: bool,
    /// Scheduler arm / cancel events
    pub log_scheduler: bool,
    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_session: true,
    log_controls: true,
    log_trades: false,
    log_series: false,
    log_scheduler: false,
    log_performance: false,
};
