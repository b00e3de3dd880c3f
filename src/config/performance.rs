pub struct PerformanceConfig {
    pub initial_capital: f64,
    /// Chance of a simulated trade on each gated tick
    pub trade_probability: f64,
    pub win_probability: f64,
    /// (min, max) profit of a winning trade
    pub win_range: (f64, f64),
    /// (min, max) loss magnitude of a losing trade
    pub loss_range: (f64, f64),
}

pub const PERFORMANCE: PerformanceConfig = PerformanceConfig {
    initial_capital: 10_000.0,
    trade_probability: 0.02, // Low probability per second
    win_probability: 0.4,
    win_range: (50.0, 250.0),
    loss_range: (50.0, 200.0),
};
