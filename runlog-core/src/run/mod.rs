mod elapsed_time;
mod pace;
mod run_entry;

pub use elapsed_time::ElapsedTime;
pub use pace::Pace;
pub use run_entry::{MIN_DISTANCE, RATING_RANGE, RunEntry};
