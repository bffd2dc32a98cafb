use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::mode::{LockStatus, lock_status};
use super::seed::{self, DietSuggestion, Theme};
use crate::models::{AppState, DayActivity, GoalBar, Macro};

#[derive(Serialize)]
pub struct StatusData {
    pub date: NaiveDate,
    pub name: String,
    pub email: String,
    pub onboarding: bool,
    pub lock: LockStatus,
    pub totals: Totals,
    pub history: Vec<DayActivity>,
    pub goals: Vec<GoalProgress>,
    pub macros: Vec<Macro>,
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<DietSuggestion>,
    pub scheduled: usize,
    pub unread_notifications: usize,
}

#[derive(Debug, Serialize)]
pub struct Totals {
    pub calories: f64,
    pub steps: u64,
    pub distance_km: f64,
    pub water_l: f64,
}

#[derive(Debug, Serialize)]
pub struct GoalProgress {
    #[serde(flatten)]
    pub goal: GoalBar,
    pub percent: f64,
}

/// Dashboard overview for the current state.
pub fn compute(
    state: &AppState,
    first_run: bool,
    now: DateTime<Utc>,
    today: NaiveDate,
) -> StatusData {
    let stats = &state.stats;
    let mode = state.profile.mode;
    StatusData {
        date: today,
        name: state.profile.name.clone(),
        email: state.profile.email.clone(),
        onboarding: first_run || mode.is_none(),
        lock: lock_status(&state.profile, now),
        totals: Totals {
            calories: stats.total_calories,
            steps: stats.total_steps,
            distance_km: (stats.total_distance_km * 100.0).round() / 100.0,
            water_l: stats.water,
        },
        history: stats.daily_history.clone(),
        goals: stats
            .goals
            .iter()
            .map(|g| GoalProgress {
                goal: g.clone(),
                percent: (g.progress() * 1000.0).round() / 10.0,
            })
            .collect(),
        macros: stats.macros.clone(),
        theme: seed::theme(mode),
        diet: mode.map(seed::diet),
        scheduled: state.schedule.len(),
        unread_notifications: state.unread_count(),
    }
}
