use rand::{Rng, rngs::StdRng};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::config::{PERFORMANCE, PerformanceConfig};
use crate::models::TradingPerformance;
use crate::utils::uniform_in;

/// Random trade generator behind the performance card.
pub struct PerformanceSimulator {
    config: &'static PerformanceConfig,
    rng: StdRng,
    performance: TradingPerformance,
}

impl PerformanceSimulator {
    pub fn new(rng: StdRng) -> Self {
        Self::with_config(&PERFORMANCE, rng)
    }

    pub fn with_config(config: &'static PerformanceConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            performance: TradingPerformance::new(config.initial_capital),
        }
    }

    pub fn performance(&self) -> &TradingPerformance {
        &self.performance
    }

    /// Maybe book one trade. Returns its P&L when a trade happened.
    pub fn step(&mut self) -> Option<f64> {
        if !self.rng.gen_bool(self.config.trade_probability) {
            return None;
        }

        let pnl = if self.rng.gen_bool(self.config.win_probability) {
            uniform_in(&mut self.rng, self.config.win_range)
        } else {
            -uniform_in(&mut self.rng, self.config.loss_range)
        };
        self.performance.apply_trade(pnl);

        #[cfg(debug_assertions)]
        if DF.log_trades {
            log::info!(
                "TRADE #{}: {:+.2} -> value {:.2}",
                self.performance.trades_count,
                pnl,
                self.performance.current_value
            );
        }
        Some(pnl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const ALWAYS_TRADE: PerformanceConfig = PerformanceConfig {
        trade_probability: 1.0,
        ..PERFORMANCE
    };

    #[test]
    fn trades_are_rare() {
        let mut sim = PerformanceSimulator::new(StdRng::seed_from_u64(3));
        let trades = (0..10_000).filter_map(|_| sim.step()).count();
        // p = 0.02, expect ~200
        assert!((100..400).contains(&trades), "{trades} trades");
        assert_eq!(sim.performance().trades_count as usize, trades);
    }

    #[test]
    fn pnl_within_configured_ranges() {
        let mut sim = PerformanceSimulator::with_config(&ALWAYS_TRADE, StdRng::seed_from_u64(4));
        for _ in 0..2_000 {
            let pnl = sim.step().expect("always trades");
            if pnl >= 0.0 {
                assert!((50.0..250.0).contains(&pnl));
            } else {
                assert!((50.0..200.0).contains(&-pnl));
            }
        }
    }

    #[test]
    fn profit_matches_value() {
        let mut sim = PerformanceSimulator::with_config(&ALWAYS_TRADE, StdRng::seed_from_u64(5));
        for _ in 0..50 {
            sim.step();
            let p = sim.performance();
            assert!((p.today_profit - (p.current_value - p.initial_capital)).abs() < 1e-6);
        }
        assert_eq!(sim.performance().trades_count, 50);
    }
}
