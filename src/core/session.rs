use chrono::{DateTime, NaiveDate, Utc};

use super::activity::{self, ActivityInput, ActivityOutcome};
use super::mode::{self, ModeSelection};
use super::seed;
use crate::models::{AppState, Mode, Notification, Profile};
use crate::store::{KeyValueStore, Snapshot, StoreResult};

/// Owns the dashboard state and mirrors it to a store after each change.
///
/// Reducers stay pure; this is the only place that writes. A failed write is
/// kept as a warning and the in-memory state is not rolled back.
pub struct Session<S: KeyValueStore> {
    store: S,
    key: String,
    state: AppState,
    first_run: bool,
    warnings: Vec<String>,
}

impl<S: KeyValueStore> Session<S> {
    /// Load the snapshot under `key`, or start from `fresh` when there is none.
    pub fn open(store: S, key: &str, fresh: Profile, now: DateTime<Utc>) -> StoreResult<Self> {
        let loaded = Snapshot::load(&store, key, now)?;
        let first_run = loaded.is_none();
        if first_run {
            tracing::debug!(key, "no stored snapshot, starting fresh");
        }
        Ok(Self {
            store,
            key: key.to_string(),
            state: loaded.unwrap_or_else(|| AppState::fresh(fresh)),
            first_run,
            warnings: Vec::new(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// True when no snapshot existed, i.e. onboarding should ask for a mode.
    pub fn is_first_run(&self) -> bool {
        self.first_run
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn persist(&mut self) {
        if let Err(e) = Snapshot::save(&mut self.store, &self.key, &self.state) {
            tracing::warn!(error = %e, key = %self.key, "failed to persist snapshot");
            self.warnings.push(format!("state not saved: {}", e));
        }
    }

    /// Select a goal mode. On success the stats are reseeded for the mode
    /// and a notification is appended; a locked request changes nothing.
    pub fn select_mode(
        &mut self,
        requested: Mode,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> ModeSelection {
        let selection = mode::select_mode(&self.state.profile, requested, now);
        if !selection.allowed() {
            tracing::warn!(requested = %requested, outcome = ?selection.outcome, "mode change rejected");
            return selection;
        }

        tracing::info!(
            from = ?self.state.profile.mode,
            to = %requested,
            switches = selection.profile.mode_switch_count,
            "mode selected"
        );
        self.state.profile = selection.profile.clone();
        self.state.stats = seed::seed_stats(requested, today);
        self.state
            .notifications
            .push(Notification::new(format!("Switched to {} mode!", requested), now));
        self.persist();
        selection
    }

    pub fn log_activity(
        &mut self,
        input: &ActivityInput,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> ActivityOutcome {
        let theme = seed::theme(self.state.profile.mode);
        let outcome = activity::log_activity(
            &self.state.stats,
            &self.state.schedule,
            input,
            today,
            &theme,
            now,
        );
        tracing::debug!(
            activity_type = %input.activity_type,
            minutes = outcome.duration_minutes,
            calories = outcome.calories_burned,
            steps = outcome.steps_taken,
            "activity logged"
        );
        self.state.stats = outcome.stats.clone();
        self.state.schedule = outcome.schedule.clone();
        if let Some(n) = &outcome.notification {
            self.state.notifications.push(n.clone());
        }
        self.persist();
        outcome
    }

    pub fn delete_schedule_item(&mut self, id: &str) -> bool {
        let removed = activity::delete_schedule_item(&mut self.state.schedule, id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn mark_notifications_read(&mut self) -> usize {
        let changed = activity::mark_all_read(&mut self.state.notifications);
        if changed > 0 {
            self.persist();
        }
        changed
    }

    pub fn clear_notifications(&mut self) -> usize {
        let n = self.state.notifications.len();
        self.state.notifications.clear();
        if n > 0 {
            self.persist();
        }
        n
    }

    /// Drop whatever is stored under `key` and start over from `fresh`.
    ///
    /// The old blob is never decoded, so a damaged or newer-version snapshot
    /// can still be cleared. Returns the session and whether a blob existed.
    pub fn discard(mut store: S, key: &str, fresh: Profile) -> StoreResult<(Self, bool)> {
        let existed = store.remove(key)?;
        tracing::info!(key, existed, "state reset");
        let session = Self {
            store,
            key: key.to_string(),
            state: AppState::fresh(fresh),
            first_run: true,
            warnings: Vec::new(),
        };
        Ok((session, existed))
    }
}
