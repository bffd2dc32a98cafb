#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use fitdash::core::activity::ActivityInput;
use fitdash::core::session::Session;
use fitdash::models::{ActivityType, Mode, Profile};
use fitdash::store::MemoryStore;

pub const KEY: &str = "fitness_data_v2";

/// Fixed instant used as "now" in tests.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()
}

pub fn minutes_after(start: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    start + Duration::minutes(minutes)
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

/// Profile that picked `mode` at `since` and has used `switches` switches.
pub fn profile_with(mode: Mode, since: DateTime<Utc>, switches: u32) -> Profile {
    Profile {
        mode: Some(mode),
        mode_since: Some(since),
        mode_switch_count: switches,
        ..Profile::default()
    }
}

pub fn input(activity_type: ActivityType, duration: &str) -> ActivityInput {
    ActivityInput {
        title: "Evening Run".into(),
        time: "18:30".into(),
        duration: duration.into(),
        activity_type,
    }
}

/// Fresh session over an empty in-memory store.
pub fn fresh_session() -> Session<MemoryStore> {
    Session::open(MemoryStore::new(), KEY, Profile::default(), t0()).unwrap()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
