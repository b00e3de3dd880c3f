//! Periods of the fixed-rate dashboard tasks (ms).
//! The series task is not listed: it runs at the selected time-frame's sample interval.

pub struct ScheduleConfig {
    pub session_ms: i64,
    pub display_clock_ms: i64,
    pub prediction_ms: i64,
    pub performance_ms: i64,
}

pub const SCHEDULE: ScheduleConfig = ScheduleConfig {
    session_ms: 1000,
    display_clock_ms: 1000,
    prediction_ms: 1000,
    performance_ms: 1000,
};
