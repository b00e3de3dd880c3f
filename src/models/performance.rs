use serde::Serialize;

use crate::utils::percent_change;

/// Mock account shown on the trading performance card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradingPerformance {
    pub initial_capital: f64,
    pub current_value: f64,
    pub today_profit: f64,
    pub today_percentage: f64,
    pub trades_count: u32,
}

impl TradingPerformance {
    pub fn new(initial_capital: f64) -> Self {
        Self {
            initial_capital,
            current_value: initial_capital,
            today_profit: 0.0,
            today_percentage: 0.0,
            trades_count: 0,
        }
    }

    /// Book one closed trade. `pnl` is signed.
    pub fn apply_trade(&mut self, pnl: f64) {
        self.current_value += pnl;
        self.today_profit = self.current_value - self.initial_capital;
        self.today_percentage = percent_change(self.initial_capital, self.current_value);
        self.trades_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_flat() {
        let p = TradingPerformance::new(10_000.0);
        assert_eq!(p.current_value, 10_000.0);
        assert_eq!(p.trades_count, 0);
        assert_eq!(p.today_profit, 0.0);
    }

    #[test]
    fn profit_tracks_current_value() {
        let mut p = TradingPerformance::new(10_000.0);
        p.apply_trade(250.0);
        p.apply_trade(-100.0);
        assert_eq!(p.trades_count, 2);
        assert!((p.current_value - 10_150.0).abs() < 1e-9);
        assert!((p.today_profit - (p.current_value - p.initial_capital)).abs() < 1e-9);
        assert!((p.today_percentage - 1.5).abs() < 1e-9);
    }

    #[test]
    fn losing_day() {
        let mut p = TradingPerformance::new(10_000.0);
        p.apply_trade(-200.0);
        assert!(p.today_profit < 0.0);
        assert!((p.today_percentage + 2.0).abs() < 1e-9);
    }
}
