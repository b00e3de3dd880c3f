mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, epoch_ms_to_clock, format_clock, format_countdown,
};

pub(crate) use maths_utils::{centered_random, percent_change, uniform_in};
