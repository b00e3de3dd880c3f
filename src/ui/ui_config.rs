use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::config::plot::PLOT_CONFIG;

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub nav_selected: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_min_width: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(96, 165, 250),
        central_panel: Color32::from_rgb(3, 7, 18),
        side_panel: Color32::from_rgb(17, 24, 39),
        nav_selected: Color32::from_rgb(37, 99, 235),
    },
    card_min_width: 320.0,
};

impl UiConfig {
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Tighter vertically than the top bar
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Rounded box used by every dashboard card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: PLOT_CONFIG.color_card_background,
            stroke: Stroke::new(1.0, PLOT_CONFIG.color_card_border),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}
