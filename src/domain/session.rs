//! Market session clock.
//!
//! The only place that knows when the exchange is open. Everything else asks
//! for a `SessionState` and never looks at wall-clock hours itself.

use chrono::{
    DateTime, Datelike, Days, FixedOffset, NaiveTime, Offset, TimeDelta, TimeZone, Timelike, Utc,
    Weekday,
};

use crate::config::MarketConfig;

/// Result of one evaluation. Derived, never stored across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub is_open: bool,
    /// Next session open strictly after the evaluated instant, in exchange time.
    pub next_open: DateTime<FixedOffset>,
    /// Time left until `next_open`. Only present while closed.
    pub countdown: Option<TimeDelta>,
}

#[derive(Debug, Clone)]
pub struct SessionClock {
    offset: FixedOffset,
    open_minute: u32,
    close_minute: u32,
    open_time: NaiveTime,
    trading_days: &'static [Weekday],
}

impl SessionClock {
    pub fn new(market: &MarketConfig) -> Self {
        let offset = FixedOffset::east_opt(market.utc_offset_secs).unwrap_or_else(|| Utc.fix());
        let open_time = NaiveTime::from_hms_opt(market.open_hour, market.open_minute, 0)
            .unwrap_or(NaiveTime::MIN);
        Self {
            offset,
            open_minute: market.open_minute_of_day(),
            close_minute: market.close_minute_of_day(),
            open_time,
            trading_days: market.trading_days,
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// `now` on the exchange wall clock.
    pub fn local(&self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        now.with_timezone(&self.offset)
    }

    fn is_trading_day(&self, day: Weekday) -> bool {
        self.trading_days.contains(&day)
    }

    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        let local = self.local(now);
        let minute_of_day = local.hour() * 60 + local.minute();
        self.is_trading_day(local.weekday())
            && minute_of_day >= self.open_minute
            && minute_of_day < self.close_minute
    }

    /// First session open strictly after `now`.
    ///
    /// Walks forward day by day from today's date in exchange time. A full
    /// week always contains a trading day, so the walk is bounded. With no
    /// trading days configured at all we report `now`.
    pub fn next_open_after(&self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        let local = self.local(now);
        let today = local.date_naive();

        for days_ahead in 0..=7 {
            let Some(date) = today.checked_add_days(Days::new(days_ahead)) else {
                break;
            };
            if !self.is_trading_day(date.weekday()) {
                continue;
            }
            let Some(candidate) = self
                .offset
                .from_local_datetime(&date.and_time(self.open_time))
                .single()
            else {
                continue;
            };
            if candidate > local {
                return candidate;
            }
        }
        local
    }

    pub fn evaluate(&self, now: DateTime<Utc>) -> SessionState {
        let is_open = self.is_open_at(now);
        let next_open = self.next_open_after(now);
        let countdown = if is_open {
            None
        } else {
            let remaining = next_open.with_timezone(&Utc) - now;
            (remaining > TimeDelta::zero()).then_some(remaining)
        };
        SessionState {
            is_open,
            next_open,
            countdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MARKET;

    fn ist(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        FixedOffset::east_opt(19_800)
            .unwrap()
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn clock() -> SessionClock {
        SessionClock::new(&MARKET)
    }

    #[test]
    fn saturday_waits_for_monday_open() {
        // 2024-01-06 is a Saturday
        let state = clock().evaluate(ist(2024, 1, 6, 10, 0, 0));
        assert!(!state.is_open);
        assert_eq!(state.next_open.weekday(), Weekday::Mon);
        assert_eq!(state.next_open.with_timezone(&Utc), ist(2024, 1, 8, 9, 15, 0));
        assert_eq!(state.countdown, Some(TimeDelta::hours(47) + TimeDelta::minutes(15)));
    }

    #[test]
    fn one_second_before_open() {
        let state = clock().evaluate(ist(2024, 1, 8, 9, 14, 59));
        assert!(!state.is_open);
        assert_eq!(state.next_open.with_timezone(&Utc), ist(2024, 1, 8, 9, 15, 0));
        assert_eq!(state.countdown, Some(TimeDelta::seconds(1)));
    }

    #[test]
    fn open_boundary_is_inclusive() {
        let state = clock().evaluate(ist(2024, 1, 8, 9, 15, 0));
        assert!(state.is_open);
        assert_eq!(state.countdown, None);
        // next open while trading is the following session
        assert_eq!(state.next_open.with_timezone(&Utc), ist(2024, 1, 9, 9, 15, 0));
    }

    #[test]
    fn close_boundary_is_exclusive() {
        let c = clock();
        assert!(c.is_open_at(ist(2024, 1, 8, 15, 29, 59)));
        let state = c.evaluate(ist(2024, 1, 8, 15, 30, 0));
        assert!(!state.is_open);
        assert_eq!(state.next_open.with_timezone(&Utc), ist(2024, 1, 9, 9, 15, 0));
        assert_eq!(state.countdown, Some(TimeDelta::hours(17) + TimeDelta::minutes(45)));
    }

    #[test]
    fn friday_evening_skips_weekend() {
        // 2024-01-12 is a Friday
        let state = clock().evaluate(ist(2024, 1, 12, 16, 0, 0));
        assert!(!state.is_open);
        assert_eq!(state.next_open.with_timezone(&Utc), ist(2024, 1, 15, 9, 15, 0));
        assert_eq!(state.countdown, Some(TimeDelta::hours(65) + TimeDelta::minutes(15)));
    }

    #[test]
    fn utc_midnight_is_already_morning_in_india() {
        // 2024-01-08 03:45 UTC == 09:15 IST
        let now = DateTime::from_timestamp(1_704_685_500, 0).unwrap();
        assert!(clock().is_open_at(now));
    }

    #[test]
    fn whole_week_invariants() {
        let c = clock();
        let start = ist(2024, 1, 6, 0, 0, 0);
        // every 7 minutes for 8 days, so both boundaries and weekends get hit
        for step in 0..(8 * 24 * 60 / 7) {
            let now = start + TimeDelta::minutes(step * 7);
            let state = c.evaluate(now);
            let local = c.local(now);
            let minute = local.hour() * 60 + local.minute();
            let weekday = local.weekday();
            let expect_open = !matches!(weekday, Weekday::Sat | Weekday::Sun)
                && (555..930).contains(&minute);
            assert_eq!(state.is_open, expect_open, "at {local}");

            assert!(state.next_open.with_timezone(&Utc) > now, "at {local}");
            assert!(!matches!(state.next_open.weekday(), Weekday::Sat | Weekday::Sun));
            assert_eq!((state.next_open.hour(), state.next_open.minute()), (9, 15));
            assert!(state.next_open.with_timezone(&Utc) - now <= TimeDelta::days(3));

            match state.countdown {
                Some(d) => {
                    assert!(!state.is_open);
                    assert!(d > TimeDelta::zero());
                    assert_eq!(now + d, state.next_open.with_timezone(&Utc));
                }
                None => assert!(state.is_open, "closed without countdown at {local}"),
            }
        }
    }
}
