use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::Serialize;

use crate::models::{Mode, Profile};

/// How long after the first selection a switch is still permitted.
pub const SWITCH_WINDOW_MINUTES: i64 = 10;
/// Number of switches permitted after the first selection.
pub const MAX_SWITCHES: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LockReason {
    SwitchesExhausted,
    WindowExpired,
}

impl std::fmt::Display for LockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SwitchesExhausted => write!(f, "the single mode switch has already been used"),
            Self::WindowExpired => write!(
                f,
                "switching is only allowed within {} minutes of the first selection",
                SWITCH_WINDOW_MINUTES
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "reason")]
pub enum Outcome {
    /// First selection on a profile with no mode.
    Assigned,
    /// One of the permitted switches was consumed.
    Switched,
    /// Rejected; the profile is unchanged.
    Locked(LockReason),
}

#[derive(Debug, Clone)]
pub struct ModeSelection {
    pub profile: Profile,
    pub outcome: Outcome,
}

impl ModeSelection {
    pub fn allowed(&self) -> bool {
        !matches!(self.outcome, Outcome::Locked(_))
    }
}

fn lock_reason(profile: &Profile, now: DateTime<Utc>) -> Option<LockReason> {
    if profile.mode.is_none() {
        return None;
    }
    if profile.mode_switch_count >= MAX_SWITCHES {
        return Some(LockReason::SwitchesExhausted);
    }
    match profile.mode_since {
        Some(since) if now - since < Duration::minutes(SWITCH_WINDOW_MINUTES) => None,
        _ => Some(LockReason::WindowExpired),
    }
}

/// Whether `select_mode` would currently accept a request.
pub fn can_switch(profile: &Profile, now: DateTime<Utc>) -> bool {
    lock_reason(profile, now).is_none()
}

/// Apply the mode lock rules to a selection request.
///
/// Requesting the mode that is already active still counts as a switch.
/// `mode_since` is stamped at millisecond precision, the resolution the
/// snapshot stores it at.
pub fn select_mode(profile: &Profile, requested: Mode, now: DateTime<Utc>) -> ModeSelection {
    let stamp = now.trunc_subsecs(3);
    if profile.mode.is_none() {
        return ModeSelection {
            profile: Profile {
                mode: Some(requested),
                mode_since: Some(stamp),
                mode_switch_count: 0,
                ..profile.clone()
            },
            outcome: Outcome::Assigned,
        };
    }

    if let Some(reason) = lock_reason(profile, now) {
        return ModeSelection {
            profile: profile.clone(),
            outcome: Outcome::Locked(reason),
        };
    }

    ModeSelection {
        profile: Profile {
            mode: Some(requested),
            mode_since: profile.mode_since.or(Some(stamp)),
            mode_switch_count: profile.mode_switch_count + 1,
            ..profile.clone()
        },
        outcome: Outcome::Switched,
    }
}

#[derive(Debug, Serialize)]
pub struct LockStatus {
    pub mode: Option<Mode>,
    pub mode_since: Option<DateTime<Utc>>,
    pub switches_used: u32,
    pub switches_allowed: u32,
    /// Seconds left in the switch window, if the window is still open.
    pub window_remaining_secs: Option<i64>,
    pub can_switch: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_reason: Option<LockReason>,
}

pub fn lock_status(profile: &Profile, now: DateTime<Utc>) -> LockStatus {
    let window_remaining_secs = match (profile.mode, profile.mode_since) {
        (Some(_), Some(since)) => {
            let left = Duration::minutes(SWITCH_WINDOW_MINUTES) - (now - since);
            (left > Duration::zero()).then(|| left.num_seconds())
        }
        _ => None,
    };
    let reason = lock_reason(profile, now);
    LockStatus {
        mode: profile.mode,
        mode_since: profile.mode_since,
        switches_used: profile.mode_switch_count,
        switches_allowed: MAX_SWITCHES,
        window_remaining_secs,
        can_switch: reason.is_none(),
        locked_reason: reason,
    }
}
