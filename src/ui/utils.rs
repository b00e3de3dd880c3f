use eframe::egui::{Context, Visuals};

use crate::ui::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

/// Groups the integer part in threes: 22013.456 -> "22,013.46".
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Rupee amount, two decimals.
pub fn format_inr(value: f64) -> String {
    let body = format_grouped(value.abs(), 2);
    if value < 0.0 && body != "0.00" {
        format!("-₹{}", body)
    } else {
        format!("₹{}", body)
    }
}

/// Signed rupee amount for P&L columns.
pub fn format_signed_inr(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_inr(value))
    } else {
        format_inr(value)
    }
}

pub fn format_signed_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(22_013.456, 2), "22,013.46");
        assert_eq!(format_grouped(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_grouped(999.0, 1), "999.0");
        assert_eq!(format_grouped(-1_500.25, 2), "-1,500.25");
    }

    #[test]
    fn rupees() {
        assert_eq!(format_inr(10_000.0), "₹10,000.00");
        assert_eq!(format_inr(-250.5), "-₹250.50");
        assert_eq!(format_signed_inr(150.0), "+₹150.00");
        assert_eq!(format_signed_inr(-75.0), "-₹75.00");
    }

    #[test]
    fn tiny_negative_is_not_signed() {
        assert_eq!(format_inr(-0.001), "₹0.00");
    }

    #[test]
    fn signed_percent() {
        assert_eq!(format_signed_pct(1.5), "+1.50%");
        assert_eq!(format_signed_pct(-2.0), "-2.00%");
    }
}
