use eframe::egui::Color32;

pub struct TickerConfig {
    pub height: f32,
    pub speed_pixels_per_sec: f32,
    pub font_size: f32,
    pub item_spacing: f32,
    pub background_color: Color32,

    pub text_color_neutral: Color32,
    pub text_color_up: Color32,
    pub text_color_down: Color32,
    pub text_color_link: Color32,

    pub disclaimer: &'static str,
}

pub const TICKER: TickerConfig = TickerConfig {
    height: 18.0,
    speed_pixels_per_sec: 60.0, // Keep at 60 - smooth on 60fps monitors
    font_size: 10.0,
    item_spacing: 40.0,
    background_color: Color32::from_rgb(10, 10, 15),

    text_color_neutral: Color32::LIGHT_GRAY,
    text_color_up: Color32::from_rgb(0, 200, 83),
    text_color_down: Color32::from_rgb(255, 61, 61),
    text_color_link: Color32::from_rgb(100, 200, 255),

    disclaimer: "SIMULATED DATA - NOT INVESTMENT ADVICE",
};
