//! Exchange session configuration (NSE cash market).

use chrono::Weekday;

pub struct MarketConfig {
    /// Exchange symbol used by the external chart widget
    pub symbol: &'static str,
    /// Human readable index name
    pub display_name: &'static str,
    /// Exchange local time as a fixed offset from UTC, in seconds.
    /// IST has no daylight saving so a fixed offset is exact.
    pub utc_offset_secs: i32,
    /// Session open (inclusive), local wall clock
    pub open_hour: u32,
    pub open_minute: u32,
    /// Session close (exclusive), local wall clock
    pub close_hour: u32,
    pub close_minute: u32,
    pub trading_days: &'static [Weekday],
}

impl MarketConfig {
    pub const fn open_minute_of_day(&self) -> u32 {
        self.open_hour * 60 + self.open_minute
    }

    pub const fn close_minute_of_day(&self) -> u32 {
        self.close_hour * 60 + self.close_minute
    }
}

pub const MARKET: MarketConfig = MarketConfig {
    symbol: "NSE:NIFTY50",
    display_name: "NIFTY 50",
    utc_offset_secs: 5 * 3600 + 30 * 60, // IST (UTC+05:30)
    open_hour: 9,
    open_minute: 15,
    close_hour: 15,
    close_minute: 30,
    trading_days: &[
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ],
};
