use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

use super::seed::{Theme, day_label, schedule_color};
use crate::models::stats::{DayActivity, HISTORY_DAYS, Stats};
use crate::models::{ActivityType, Notification, ScheduleItem};

pub const DEFAULT_DURATION_MINUTES: u32 = 30;
pub const DEFAULT_DURATION_LABEL: &str = "30 min";
/// Roughly 0.8 m per step.
pub const KM_PER_STEP: f64 = 0.0008;

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?)(\d+)").expect("static regex"));

/// Per-minute burn rates for an activity type: (kcal, steps).
pub fn rates(activity_type: ActivityType) -> (f64, u64) {
    match activity_type {
        ActivityType::Fitness => (10.0, 130),
        ActivityType::Wellness => (3.5, 10),
        ActivityType::Nutrition => (0.0, 0),
        ActivityType::Other => (5.0, 100),
    }
}

/// Minutes from a duration label such as `"45 min"` or `"1 hr"`.
///
/// Only the leading integer is read, so `"1 hr"` is one minute. Anything
/// that does not yield a positive number falls back to 30; a number too
/// large for `u32` saturates at `u32::MAX`.
pub fn parse_duration_minutes(label: &str) -> u32 {
    let Some(caps) = LEADING_INT.captures(label) else {
        return DEFAULT_DURATION_MINUTES;
    };
    let digits = caps[2].trim_start_matches('0');
    if &caps[1] == "-" || digits.is_empty() {
        return DEFAULT_DURATION_MINUTES;
    }
    // only overflow can fail on a non-empty run of digits
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Raw form input for a new activity.
#[derive(Debug, Clone, Default)]
pub struct ActivityInput {
    pub title: String,
    pub time: String,
    pub duration: String,
    pub activity_type: ActivityType,
}

#[derive(Debug, Clone)]
pub struct ActivityOutcome {
    pub stats: Stats,
    pub schedule: Vec<ScheduleItem>,
    pub item: ScheduleItem,
    pub notification: Option<Notification>,
    pub duration_minutes: u32,
    pub calories_burned: f64,
    pub steps_taken: u64,
}

/// Fold one logged activity into the stats and schedule.
///
/// Total: every input produces a result. Nutrition entries are scheduled
/// but leave the totals untouched.
pub fn log_activity(
    stats: &Stats,
    schedule: &[ScheduleItem],
    input: &ActivityInput,
    today: NaiveDate,
    theme: &Theme,
    now: DateTime<Utc>,
) -> ActivityOutcome {
    let duration_minutes = parse_duration_minutes(&input.duration);
    let (kcal_rate, step_rate) = rates(input.activity_type);
    let calories_burned = f64::from(duration_minutes) * kcal_rate;
    let steps_taken = u64::from(duration_minutes) * step_rate;

    let item = ScheduleItem {
        id: Uuid::new_v4().to_string(),
        time: input.time.clone(),
        title: input.title.clone(),
        activity_type: input.activity_type,
        duration: if input.duration.trim().is_empty() {
            DEFAULT_DURATION_LABEL.to_string()
        } else {
            input.duration.clone()
        },
        color: schedule_color(input.activity_type, theme).to_string(),
    };
    let mut new_schedule = schedule.to_vec();
    new_schedule.push(item.clone());

    let mut new_stats = stats.clone();
    new_stats.total_calories += calories_burned;
    new_stats.total_steps = new_stats.total_steps.saturating_add(steps_taken);
    new_stats.total_distance_km += steps_taken as f64 * KM_PER_STEP;
    record_day(
        &mut new_stats.daily_history,
        &day_label(today),
        calories_burned,
        steps_taken,
    );

    let notification = (calories_burned > 0.0).then(|| {
        Notification::new(
            format!("Activity added! Burned {} kcal.", calories_burned),
            now,
        )
    });

    ActivityOutcome {
        stats: new_stats,
        schedule: new_schedule,
        item,
        notification,
        duration_minutes,
        calories_burned,
        steps_taken,
    }
}

/// Add a day's totals to the history, keeping the last `HISTORY_DAYS` labels.
pub fn record_day(history: &mut Vec<DayActivity>, label: &str, calories: f64, steps: u64) {
    if let Some(day) = history.iter_mut().find(|d| d.label == label) {
        day.calories += calories;
        day.steps = day.steps.saturating_add(steps);
    } else {
        history.push(DayActivity {
            label: label.to_string(),
            calories,
            steps,
        });
    }
    if history.len() > HISTORY_DAYS {
        let excess = history.len() - HISTORY_DAYS;
        history.drain(..excess);
    }
}

/// Remove a schedule entry. Returns false when no entry has `id`.
///
/// Stats already folded in from the entry are kept.
pub fn delete_schedule_item(schedule: &mut Vec<ScheduleItem>, id: &str) -> bool {
    let before = schedule.len();
    schedule.retain(|s| s.id != id);
    schedule.len() != before
}

/// Clear the unread flag on every notification. Returns how many changed.
pub fn mark_all_read(notifications: &mut [Notification]) -> usize {
    let mut changed = 0;
    for n in notifications.iter_mut().filter(|n| n.unread) {
        n.unread = false;
        changed += 1;
    }
    changed
}
