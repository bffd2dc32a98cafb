pub mod config;
pub mod mode;
pub mod profile;
pub mod schedule;
pub mod state;
pub mod stats;

pub use mode::{ActivityType, Mode};
pub use profile::Profile;
pub use schedule::{Notification, ScheduleItem};
pub use state::AppState;
pub use stats::{DayActivity, GoalBar, Macro, Stats};
