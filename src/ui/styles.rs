use {
    crate::{
        config::plot::PLOT_CONFIG,
        models::Direction,
        ui::UI_CONFIG,
    },
    eframe::egui::{
        Color32, CornerRadius, FontId, Frame, Margin, Response, RichText, Sense, Stroke,
        StrokeKind, Ui, Vec2, WidgetInfo, WidgetType,
    },
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait DirectionColor {
    fn color(&self) -> Color32;
    fn badge_background(&self) -> Color32;
}

impl DirectionColor for Direction {
    fn color(&self) -> Color32 {
        match self {
            Self::Up => PLOT_CONFIG.color_up,
            Self::Down => PLOT_CONFIG.color_down,
        }
    }

    fn badge_background(&self) -> Color32 {
        match self {
            Self::Up => PLOT_CONFIG.color_badge_up_bg,
            Self::Down => PLOT_CONFIG.color_badge_down_bg,
        }
    }
}

pub fn get_outcome_color(value: f64) -> Color32 {
    if value >= 0.0 {
        PLOT_CONFIG.color_profit
    } else {
        PLOT_CONFIG.color_loss
    }
}

pub(crate) trait UiStyleExt {
    /// Interactive label acting as button: transparent when idle, gray bg on hover, blue bg when selected.
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn badge(&mut self, text: &str, color: Color32, background: Color32);
}

impl UiStyleExt for Ui {
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response {
        let padding = Vec2::new(8.0, 4.0);
        let galley = self
            .painter()
            .layout_no_wrap(text.to_string(), font_id, idle_color);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let visuals = self.style().visuals.clone();
            let (bg_fill, text_color) = if is_selected {
                (UI_CONFIG.colors.nav_selected, Color32::WHITE)
            } else if response.hovered() || response.has_focus() {
                (visuals.widgets.hovered.bg_fill, Color32::WHITE)
            } else {
                (Color32::TRANSPARENT, idle_color)
            };

            if is_selected || response.hovered() {
                self.painter().rect(
                    rect,
                    CornerRadius::same(4),
                    bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }
            let text_pos = rect.left_top() + padding;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn badge(&mut self, text: &str, color: Color32, background: Color32) {
        Frame {
            fill: background,
            corner_radius: CornerRadius::same(10),
            inner_margin: Margin::symmetric(8, 2),
            ..Default::default()
        }
        .show(self, |ui| {
            ui.label(RichText::new(text).small().strong().color(color));
        });
    }
}
