//! Serialized form of [`AppState`] and the schema migrations applied on load.
//!
//! Every blob carries a `schemaVersion`. Blobs without one predate
//! versioning and are treated as version 0. On load the raw JSON is walked
//! up through [`MIGRATIONS`] one step at a time and only then deserialized,
//! so the typed model never has to know about old field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::KeyValueStore;
use super::error::{StoreError, StoreResult};
use crate::models::profile::DEFAULT_NAME;
use crate::models::{AppState, Notification, Profile, ScheduleItem, Stats};

pub const CURRENT_VERSION: u64 = 1;

/// Profile name shipped as the default by early builds.
const LEGACY_DEFAULT_NAME: &str = "mr_ask_chay";

type Migration = fn(&mut Map<String, Value>, DateTime<Utc>) -> StoreResult<()>;

/// `MIGRATIONS[n]` upgrades a version `n` blob to version `n + 1`.
const MIGRATIONS: &[Migration] = &[v0_to_v1];

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub schema_version: u64,
    pub profile: Profile,
    pub stats: Stats,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl From<Snapshot> for AppState {
    fn from(s: Snapshot) -> Self {
        Self {
            profile: s.profile,
            stats: s.stats,
            schedule: s.schedule,
            notifications: s.notifications,
        }
    }
}

impl Snapshot {
    pub fn encode(state: &AppState) -> StoreResult<String> {
        let snapshot = Snapshot {
            schema_version: CURRENT_VERSION,
            profile: state.profile.clone(),
            stats: state.stats.clone(),
            schedule: state.schedule.clone(),
            notifications: state.notifications.clone(),
        };
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Parse a blob of any supported version. `now` stamps records whose
    /// legacy form carried no usable timestamp.
    pub fn decode(blob: &str, now: DateTime<Utc>) -> StoreResult<AppState> {
        let mut value: Value = serde_json::from_str(blob)?;
        let obj = value
            .as_object_mut()
            .ok_or_else(|| StoreError::Malformed("snapshot is not a JSON object".into()))?;

        let found = obj
            .get("schemaVersion")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        if found > CURRENT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found,
                supported: CURRENT_VERSION,
            });
        }
        for (from, migrate) in MIGRATIONS.iter().enumerate().skip(found as usize) {
            migrate(obj, now)?;
            tracing::info!(from, to = from + 1, "migrated snapshot");
        }
        obj.insert("schemaVersion".into(), Value::from(CURRENT_VERSION));

        let snapshot: Snapshot = serde_json::from_value(value)?;
        Ok(snapshot.into())
    }

    pub fn load(
        store: &impl KeyValueStore,
        key: &str,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<AppState>> {
        match store.load(key)? {
            Some(blob) => Ok(Some(Self::decode(&blob, now)?)),
            None => Ok(None),
        }
    }

    pub fn save(store: &mut impl KeyValueStore, key: &str, state: &AppState) -> StoreResult<()> {
        let blob = Self::encode(state)?;
        store.save(key, &blob)
    }
}

fn object_mut<'a>(
    obj: &'a mut Map<String, Value>,
    field: &str,
) -> StoreResult<Option<&'a mut Map<String, Value>>> {
    match obj.get_mut(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(inner)) => Ok(Some(inner)),
        Some(_) => Err(StoreError::Malformed(format!("'{}' is not an object", field))),
    }
}

fn rename(obj: &mut Map<String, Value>, from: &str, to: &str) {
    if let Some(v) = obj.remove(from) {
        obj.entry(to.to_string()).or_insert(v);
    }
}

/// Unversioned blobs: short stat names, `modeSince: 0` for "never", the old
/// default profile name, and notifications carrying a display label instead
/// of a timestamp.
fn v0_to_v1(obj: &mut Map<String, Value>, now: DateTime<Utc>) -> StoreResult<()> {
    if let Some(profile) = object_mut(obj, "profile")? {
        if profile.get("name").and_then(Value::as_str) == Some(LEGACY_DEFAULT_NAME) {
            profile.insert("name".into(), Value::from(DEFAULT_NAME));
        }
        let since = profile.get("modeSince").and_then(Value::as_i64);
        if matches!(since, None | Some(0)) {
            profile.insert("modeSince".into(), Value::Null);
        }
    }

    match object_mut(obj, "stats")? {
        Some(stats) => {
            rename(stats, "calories", "totalCalories");
            rename(stats, "steps", "totalSteps");
            rename(stats, "distance", "totalDistanceKm");
            rename(stats, "activity", "dailyHistory");
            if let Some(Value::Array(days)) = stats.get_mut("dailyHistory") {
                for day in days.iter_mut().filter_map(Value::as_object_mut) {
                    rename(day, "name", "label");
                }
            }
        }
        None => {
            obj.insert("stats".into(), serde_json::to_value(Stats::default())?);
        }
    }

    if !obj.contains_key("profile") || obj["profile"].is_null() {
        obj.insert("profile".into(), serde_json::to_value(Profile::default())?);
    }

    if let Some(Value::Array(notes)) = obj.get_mut("notifications") {
        for note in notes.iter_mut().filter_map(Value::as_object_mut) {
            note.remove("time");
            note.entry("createdAt")
                .or_insert_with(|| Value::from(now.to_rfc3339()));
        }
    }
    Ok(())
}
