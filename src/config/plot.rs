//! Chart and card colours

use eframe::egui::Color32;

pub struct PlotConfig {
    pub chart_height: f32,
    pub line_width: f32,
    pub line_color: Color32,
    pub reference_line_color: Color32,
    /// Probability chart y-range
    pub probability_bounds: (f64, f64),
    pub probability_reference: f64,
    /// Y padding factor for the index chart (0.05 = 5% top and bottom)
    pub plot_y_padding_pct: f64,

    // --- SEMANTIC COLORS ---
    pub color_up: Color32,
    pub color_down: Color32,
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_info: Color32,
    pub color_warning: Color32,

    pub color_text_primary: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,

    pub color_card_background: Color32,
    pub color_card_border: Color32,
    pub color_badge_up_bg: Color32,
    pub color_badge_down_bg: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    chart_height: 240.0,
    line_width: 2.0,
    line_color: Color32::WHITE,
    reference_line_color: Color32::WHITE,
    probability_bounds: (0.0, 100.0),
    probability_reference: 50.0,
    plot_y_padding_pct: 0.05,

    color_up: Color32::from_rgb(0, 200, 83), // Nifty green
    color_down: Color32::from_rgb(255, 61, 61), // Nifty red
    color_profit: Color32::from_rgb(100, 255, 100),
    color_loss: Color32::from_rgb(255, 80, 80),
    color_info: Color32::from_rgb(58, 134, 255),
    color_warning: Color32::from_rgb(255, 215, 0),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_card_background: Color32::from_rgb(17, 24, 39),
    color_card_border: Color32::from_gray(60),
    color_badge_up_bg: Color32::from_rgb(5, 46, 22),
    color_badge_down_bg: Color32::from_rgb(69, 10, 10),
};
