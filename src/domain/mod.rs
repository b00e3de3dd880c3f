mod session;
mod time_frame;

pub use session::{SessionClock, SessionState};
pub use time_frame::TimeFrame;
