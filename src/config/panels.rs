//! Static content for the Analysis, Trades and Insights pages.

pub struct ImpactRow {
    pub title: &'static str,
    /// Secondary text shown next to the title (signal, activity level, action)
    pub detail: Option<&'static str>,
    /// Signed percentage impact
    pub impact_pct: f64,
}

pub struct ImpactList {
    pub heading: &'static str,
    pub rows: &'static [ImpactRow],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    Buy,
    Sell,
}

pub struct TradeRow {
    pub time: &'static str,
    pub action: TradeAction,
    pub contract: &'static str,
    pub price: f64,
    pub quantity: u32,
    /// Realised P&L of the round trip this leg belongs to (INR)
    pub result: f64,
}

pub struct TradesSummary {
    pub initial_capital: f64,
    pub current_value: f64,
}

impl TradesSummary {
    pub fn profit(&self) -> f64 {
        self.current_value - self.initial_capital
    }

    pub fn profit_pct(&self) -> f64 {
        if self.initial_capital.abs() < f64::EPSILON {
            return 0.0;
        }
        self.profit() / self.initial_capital * 100.0
    }
}

pub struct AccuracyBar {
    pub label: &'static str,
    pub pct: f64,
}

pub struct LearningArea {
    pub name: &'static str,
    pub points: i64,
}

pub struct PatternCard {
    pub name: &'static str,
    pub confidence_pct: f64,
    pub chart: &'static str,
}

pub struct InsightsContent {
    pub accuracy_30d: f64,
    pub accuracy_change_wow: f64,
    pub accuracy_bars: &'static [AccuracyBar],
    pub reward_points: i64,
    pub reward_today: i64,
    pub learning_areas: &'static [LearningArea],
    pub patterns: &'static [PatternCard],
}

pub struct PanelsContent {
    pub analysis: &'static [ImpactList],
    pub trades_summary: TradesSummary,
    pub trades: &'static [TradeRow],
    pub insights: InsightsContent,
}

pub const PANELS: PanelsContent = PanelsContent {
    analysis: &[
        ImpactList {
            heading: "News Impact",
            rows: &[
                ImpactRow { title: "RBI policy announcement", detail: None, impact_pct: 4.2 },
                ImpactRow { title: "US Fed rate decision", detail: None, impact_pct: -2.7 },
                ImpactRow { title: "Quarterly earnings beat", detail: None, impact_pct: 3.5 },
                ImpactRow { title: "Global market rally", detail: None, impact_pct: 1.8 },
            ],
        },
        ImpactList {
            heading: "Technical Indicators",
            rows: &[
                ImpactRow { title: "MACD", detail: Some("Bullish crossover"), impact_pct: 2.5 },
                ImpactRow { title: "RSI", detail: Some("Overbought (78)"), impact_pct: -1.8 },
                ImpactRow { title: "Moving Averages", detail: Some("Golden cross"), impact_pct: 3.2 },
                ImpactRow { title: "Volume Profile", detail: Some("Above average"), impact_pct: 1.1 },
            ],
        },
        ImpactList {
            heading: "Algo Bot Activity",
            rows: &[
                ImpactRow { title: "Block trades", detail: Some("High"), impact_pct: -2.1 },
                ImpactRow { title: "High frequency movement", detail: Some("Medium"), impact_pct: 1.9 },
                ImpactRow { title: "Short covering", detail: Some("High"), impact_pct: 3.5 },
                ImpactRow { title: "Momentum follow", detail: Some("Low"), impact_pct: 0.7 },
            ],
        },
        ImpactList {
            heading: "Institutional Activity",
            rows: &[
                ImpactRow { title: "FIIs", detail: Some("Net buyers"), impact_pct: 2.7 },
                ImpactRow { title: "DIIs", detail: Some("Net sellers"), impact_pct: -1.4 },
                ImpactRow { title: "Promoters", detail: Some("Increased stake"), impact_pct: 1.8 },
                ImpactRow { title: "Retail", detail: Some("Net buyers"), impact_pct: 0.5 },
            ],
        },
    ],
    trades_summary: TradesSummary {
        initial_capital: 10_000.0,
        current_value: 10_850.0,
    },
    trades: &[
        TradeRow { time: "09:32", action: TradeAction::Buy, contract: "NIFTY 22000 CE", price: 145.50, quantity: 25, result: 620.0 },
        TradeRow { time: "10:15", action: TradeAction::Sell, contract: "NIFTY 22000 CE", price: 170.30, quantity: 25, result: 620.0 },
        TradeRow { time: "11:45", action: TradeAction::Buy, contract: "NIFTY 21800 CE", price: 92.70, quantity: 50, result: -410.0 },
        TradeRow { time: "12:20", action: TradeAction::Sell, contract: "NIFTY 21800 CE", price: 84.50, quantity: 50, result: -410.0 },
        TradeRow { time: "13:45", action: TradeAction::Buy, contract: "NIFTY 22100 CE", price: 110.25, quantity: 40, result: 640.0 },
        TradeRow { time: "14:30", action: TradeAction::Sell, contract: "NIFTY 22100 CE", price: 126.25, quantity: 40, result: 640.0 },
    ],
    insights: InsightsContent {
        accuracy_30d: 78.5,
        accuracy_change_wow: 2.4,
        accuracy_bars: &[
            AccuracyBar { label: "Today", pct: 85.0 },
            AccuracyBar { label: "This Week", pct: 79.0 },
            AccuracyBar { label: "This Month", pct: 74.0 },
        ],
        reward_points: 1_245,
        reward_today: 248,
        learning_areas: &[
            LearningArea { name: "Pattern recognition", points: 320 },
            LearningArea { name: "News sentiment analysis", points: 285 },
            LearningArea { name: "Volume analysis", points: 210 },
        ],
        patterns: &[
            PatternCard { name: "Double Bottom", confidence_pct: 92.0, chart: "30min chart" },
            PatternCard { name: "Bullish Engulfing", confidence_pct: 87.0, chart: "Daily chart" },
            PatternCard { name: "Resistance Break", confidence_pct: 78.0, chart: "1hr chart" },
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trades_summary_matches_headline_figures() {
        let s = &PANELS.trades_summary;
        assert!((s.profit() - 850.0).abs() < 1e-9);
        assert!((s.profit_pct() - 8.5).abs() < 1e-9);
    }

    #[test]
    fn every_trade_leg_has_a_matching_exit() {
        let buys = PANELS.trades.iter().filter(|t| t.action == TradeAction::Buy).count();
        let sells = PANELS.trades.len() - buys;
        assert_eq!(buys, sells);
    }
}
