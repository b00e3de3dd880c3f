//! Third-party chart widget. Treated as a black box: we only hand it a symbol and a theme.

pub struct ChartEmbedConfig {
    pub base_url: &'static str,
    pub symbol: &'static str,
    pub theme: &'static str,
    /// Bar interval in minutes, as the widget expects it
    pub interval: &'static str,
    pub timezone: &'static str,
}

pub const CHART_EMBED: ChartEmbedConfig = ChartEmbedConfig {
    base_url: "https://www.tradingview.com/chart/",
    symbol: super::MARKET.symbol,
    theme: "dark",
    interval: "1",
    timezone: "Asia/Kolkata",
};
