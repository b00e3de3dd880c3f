use eframe::egui::{Color32, FontId, Pos2, Rect, Sense, Ui, Vec2};

use crate::config::{MARKET, TICKER};
use crate::engine::DashboardEngine;
use crate::models::Direction;
use crate::ui::utils::{format_grouped, format_signed_pct};
use crate::utils::format_countdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerTone {
    Up,
    Down,
    Neutral,
}

pub struct TickerItem {
    pub text: String,
    pub tone: TickerTone,
    /// Clicking opens the external chart.
    pub opens_chart: bool,
}

#[derive(Default)]
pub struct TickerState {
    // Horizontal offset (pixels)
    offset: f32,
    items: Vec<TickerItem>,
    is_hovered: bool,
    is_dragging: bool,
}

impl TickerState {
    /// Rebuild the tape from the engine's latest values.
    pub fn update_data(&mut self, engine: &DashboardEngine) {
        self.items.clear();

        // 1. Index level and change across the visible window
        let index = engine.index_series();
        if let (Some(first), Some(last)) = (index.first(), index.last()) {
            let change = last.value - first.value;
            let pct = crate::utils::percent_change(first.value, last.value);
            let tone = if change > f64::EPSILON {
                TickerTone::Up
            } else if change < -f64::EPSILON {
                TickerTone::Down
            } else {
                TickerTone::Neutral
            };
            self.items.push(TickerItem {
                text: format!(
                    "{} {} ({:+.2} / {}) [{}]",
                    MARKET.display_name,
                    format_grouped(last.value, 2),
                    change,
                    format_signed_pct(pct),
                    index.time_frame()
                ),
                tone,
                opens_chart: true,
            });
        }

        // 2. Prediction
        let prediction = engine.prediction();
        self.items.push(TickerItem {
            text: format!(
                "PREDICTION {} {} {}% {}",
                prediction.direction.arrow(),
                prediction.direction,
                prediction.confidence,
                prediction.trend
            ),
            tone: match prediction.direction {
                Direction::Up => TickerTone::Up,
                Direction::Down => TickerTone::Down,
            },
            opens_chart: false,
        });

        // 3. Session
        let session = engine.session();
        let session_text = match session.countdown {
            Some(countdown) if !session.is_open => {
                format!("MARKET CLOSED - OPENS IN {}", format_countdown(countdown))
            }
            _ if session.is_open => "MARKET OPEN".to_string(),
            _ => "MARKET CLOSED".to_string(),
        };
        self.items.push(TickerItem {
            text: session_text,
            tone: TickerTone::Neutral,
            opens_chart: false,
        });

        // 4. Disclaimer
        self.items.push(TickerItem {
            text: TICKER.disclaimer.to_string(),
            tone: TickerTone::Neutral,
            opens_chart: false,
        });
    }

    fn format_item(item: &TickerItem) -> String {
        if item.opens_chart {
            return format!("{} 🔗", item.text);
        }
        item.text.clone()
    }

    fn item_color(item: &TickerItem) -> Color32 {
        match item.tone {
            TickerTone::Up => TICKER.text_color_up,
            TickerTone::Down => TICKER.text_color_down,
            TickerTone::Neutral if item.opens_chart => TICKER.text_color_link,
            TickerTone::Neutral => TICKER.text_color_neutral,
        }
    }

    /// Returns true when a chart-linked item was clicked this frame.
    pub fn render(&mut self, ui: &mut Ui) -> bool {
        let mut chart_clicked = false;
        let rect = ui.available_rect_before_wrap();
        let height = TICKER.height;
        let panel_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), height));
        let response = ui.allocate_rect(panel_rect, Sense::click_and_drag());
        ui.painter()
            .rect_filled(panel_rect, 0.0, TICKER.background_color);

        self.is_hovered = response.hovered();
        self.is_dragging = response.dragged();

        if self.is_dragging {
            // Drag to scrub
            self.offset += response.drag_delta().x;
        } else if !self.is_hovered {
            // Clamp dt so a long frame slows the tape instead of jumping it
            let dt = ui.input(|i| i.stable_dt).min(0.05);
            self.offset -= TICKER.speed_pixels_per_sec * dt;
        }

        let painter = ui.painter().with_clip_rect(panel_rect);
        let font_id = FontId::monospace(TICKER.font_size);

        // Pass 1: total width, for wrapping
        let mut total_width = 0.0;
        for item in &self.items {
            let galley =
                painter.layout_no_wrap(Self::format_item(item), font_id.clone(), Color32::WHITE);
            total_width += galley.size().x + TICKER.item_spacing;
        }

        if total_width < 1.0 {
            return false;
        }

        self.offset %= total_width;
        if self.offset > 0.0 {
            self.offset -= total_width;
        }

        // Pass 2: draw visible items, looping the list until the panel is full
        let screen_width = panel_rect.width();
        let start_pos = panel_rect.min;
        let loops_needed = (screen_width / total_width).ceil() as i32 + 2;

        for loop_idx in 0..loops_needed {
            let mut loop_x = self.offset + (loop_idx as f32 * total_width);

            for item in &self.items {
                let text_color = Self::item_color(item);
                let galley =
                    painter.layout_no_wrap(Self::format_item(item), font_id.clone(), text_color);
                let w = galley.size().x;
                let h = galley.size().y;

                if loop_x + w > 0.0 && loop_x < screen_width {
                    let x_snapped = (start_pos.x + loop_x).round();
                    let y_snapped = (start_pos.y + (height - h) / 2.0).round();
                    let pos = Pos2::new(x_snapped, y_snapped);

                    painter.galley(pos, galley, text_color);

                    if item.opens_chart {
                        let line_y = y_snapped + h + 1.0;
                        painter.line_segment(
                            [Pos2::new(x_snapped, line_y), Pos2::new(x_snapped + w, line_y)],
                            (1.0, text_color),
                        );
                    }

                    if item.opens_chart && response.clicked() {
                        let item_rect = Rect::from_min_size(pos, Vec2::new(w, height));
                        if response
                            .interact_pointer_pos()
                            .is_some_and(|pointer| item_rect.contains(pointer))
                        {
                            chart_clicked = true;
                        }
                    }
                }

                loop_x += w + TICKER.item_spacing;
            }
        }

        // Keep animating while scrolling
        if !self.is_hovered && !self.is_dragging {
            ui.ctx().request_repaint();
        }
        chart_clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeFrame;
    use crate::engine::EngineOptions;
    use chrono::DateTime;

    #[test]
    fn tape_lists_index_prediction_session_and_disclaimer() {
        // Saturday 2024-01-06 05:30 UTC
        let now = DateTime::from_timestamp(1_704_519_000, 0).unwrap();
        let engine = DashboardEngine::new(
            EngineOptions {
                demo: false,
                time_frame: TimeFrame::M1,
                seed: Some(9),
            },
            now,
        );
        let mut ticker = TickerState::default();
        ticker.update_data(&engine);

        let items = &ticker.items;
        assert_eq!(items.len(), 4);
        assert!(items[0].text.starts_with("NIFTY 50 "));
        assert!(items[0].text.ends_with("[1m]"));
        assert!(items[1].text.starts_with("PREDICTION"));
        assert!(items[2].text.starts_with("MARKET CLOSED - OPENS IN "));
        assert_eq!(items[3].text, TICKER.disclaimer);

        // only the index quote links out
        let linked: Vec<bool> = items.iter().map(|i| i.opens_chart).collect();
        assert_eq!(linked, vec![true, false, false, false]);

        // rebuilding does not accumulate
        ticker.update_data(&engine);
        assert_eq!(ticker.items.len(), 4);
    }
}
