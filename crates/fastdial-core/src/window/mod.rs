mod time_of_day;
mod time_window;

pub use time_of_day::{TimeOfDay, MINUTES_PER_DAY};
pub use time_window::TimeWindow;
