use std::sync::LazyLock;

pub const ICON_DOT: &str = "●";
pub const ICON_CLOCK: &str = "⏱";
pub const ICON_LINK: &str = "🔗";
pub const ICON_CHECK: &str = "✔";
pub const ICON_CROSS: &str = "✖";

pub struct UiText {
    pub app_title: String,

    // --- Top navigation ---
    pub nav_main: String,
    pub nav_analysis: String,
    pub nav_trades: String,
    pub nav_insights: String,
    pub demo_on: String,
    pub demo_off: String,
    pub market_open: String,
    pub market_closed: String,
    pub opens_in: String,
    pub open_chart: String,

    // --- Prediction card ---
    pub prediction_heading: String,
    pub label_confidence: String,
    pub label_strong_signal: String,
    pub label_last_prediction: String,
    pub label_correct: String,
    pub label_incorrect: String,
    pub label_awaiting: String,
    pub label_accuracy: String,

    // --- Performance card ---
    pub performance_heading: String,
    pub label_initial_capital: String,
    pub label_current_value: String,
    pub label_today_pnl: String,
    pub label_trades_today: String,

    // --- Charts ---
    pub chart_probability_heading: String,
    pub chart_index_heading: String,
    pub chart_time_frame: String,
    pub plot_y_probability: String,
    pub plot_y_index: String,

    // --- Closed market ---
    pub closed_title: String,
    pub closed_body: String,
    pub closed_next_open: String,
    pub closed_view_demo: String,

    // --- Footer ---
    pub footer_live: String,
    pub footer_demo: String,
    pub footer_last_updated: String,
    pub footer_disclaimer: String,

    // --- Trades page ---
    pub trades_heading: String,
    pub trades_columns: [&'static str; 6],
    pub label_profit: String,

    // --- Insights page ---
    pub insights_accuracy_heading: String,
    pub insights_week_on_week: String,
    pub insights_rewards_heading: String,
    pub insights_points_today: String,
    pub insights_learning_heading: String,
    pub insights_patterns_heading: String,
    pub insights_pattern_confidence: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Nifty Pulse".to_string(),

    nav_main: "Main".to_string(),
    nav_analysis: "Analysis".to_string(),
    nav_trades: "Trades".to_string(),
    nav_insights: "Insights".to_string(),
    demo_on: "Demo: ON".to_string(),
    demo_off: "Demo: OFF".to_string(),
    market_open: "Market Open".to_string(),
    market_closed: "Market Closed".to_string(),
    opens_in: "Opens in".to_string(),
    open_chart: format!("Chart {}", ICON_LINK),

    prediction_heading: "Nifty Direction Prediction".to_string(),
    label_confidence: "Confidence".to_string(),
    label_strong_signal: "STRONG SIGNAL".to_string(),
    label_last_prediction: "Last prediction".to_string(),
    label_correct: format!("{} Correct", ICON_CHECK),
    label_incorrect: format!("{} Incorrect", ICON_CROSS),
    label_awaiting: "Awaiting first result".to_string(),
    label_accuracy: "Accuracy".to_string(),

    performance_heading: "Trading Performance".to_string(),
    label_initial_capital: "Initial capital".to_string(),
    label_current_value: "Current value".to_string(),
    label_today_pnl: "Today's P&L".to_string(),
    label_trades_today: "Trades today".to_string(),

    chart_probability_heading: "Up-move Probability".to_string(),
    chart_index_heading: "NIFTY 50".to_string(),
    chart_time_frame: format!("{} Time-frame:", ICON_CLOCK),
    plot_y_probability: "Probability %".to_string(),
    plot_y_index: "Index".to_string(),

    closed_title: "Market is Currently Closed".to_string(),
    closed_body: "NSE trades Monday to Friday, 09:15 to 15:30 IST.".to_string(),
    closed_next_open: "Next session opens in".to_string(),
    closed_view_demo: "View Demo Data".to_string(),

    footer_live: "Live Mode".to_string(),
    footer_demo: "Demo Mode".to_string(),
    footer_last_updated: "Last updated".to_string(),
    footer_disclaimer: "Simulated data. Not investment advice.".to_string(),

    trades_heading: "Recent Trades".to_string(),
    trades_columns: ["Time", "Action", "Contract", "Price", "Qty", "Result"],
    label_profit: "Profit".to_string(),

    insights_accuracy_heading: "30-day Accuracy".to_string(),
    insights_week_on_week: "vs last week".to_string(),
    insights_rewards_heading: "Reward Points".to_string(),
    insights_points_today: "today".to_string(),
    insights_learning_heading: "Learning Progress".to_string(),
    insights_patterns_heading: "Detected Patterns".to_string(),
    insights_pattern_confidence: "confidence".to_string(),
});
