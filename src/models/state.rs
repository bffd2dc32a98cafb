use serde::{Deserialize, Serialize};

use super::profile::Profile;
use super::schedule::{Notification, ScheduleItem};
use super::stats::Stats;

/// Everything the dashboard persists. Reducers take and return pieces of
/// this value; the session writes it out after every transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub profile: Profile,
    pub stats: Stats,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl AppState {
    /// First-run state using the given identity.
    pub fn fresh(profile: Profile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| n.unread).count()
    }
}
