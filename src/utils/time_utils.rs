use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

/// Wall-clock independent instant that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_5_S: i64 = Self::MS_IN_S * 5;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";

    pub fn now_utc() -> DateTime<Utc> {
        Utc::now()
    }
}

/// `HH:MM:SS` in the given offset. Used for the footer clock and chart axes.
pub fn format_clock(at: DateTime<FixedOffset>) -> String {
    at.format(TimeUtils::CLOCK_FORMAT).to_string()
}

pub fn epoch_ms_to_clock(epoch_ms: i64, offset: FixedOffset) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => format_clock(dt.with_timezone(&offset)),
        None => String::new(),
    }
}

/// `"{h}h {m}m {s}s"`, hours are not wrapped into days.
pub fn format_countdown(remaining: TimeDelta) -> String {
    let total = remaining.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_splits_hours_minutes_seconds() {
        let d = TimeDelta::seconds(2 * 3600 + 5 * 60 + 9);
        assert_eq!(format_countdown(d), "2h 5m 9s");
    }

    #[test]
    fn countdown_keeps_hours_past_a_day() {
        // Friday close to Monday open is well over 24h
        let d = TimeDelta::hours(65) + TimeDelta::minutes(45);
        assert_eq!(format_countdown(d), "65h 45m 0s");
    }

    #[test]
    fn negative_countdown_reads_as_zero() {
        assert_eq!(format_countdown(TimeDelta::seconds(-3)), "0h 0m 0s");
    }

    #[test]
    fn clock_uses_requested_offset() {
        let ist = FixedOffset::east_opt(19_800).expect("valid offset");
        // 2024-01-08 04:00:00 UTC
        let ms = 1_704_686_400_000;
        assert_eq!(epoch_ms_to_clock(ms, ist), "09:30:00");
    }
}
