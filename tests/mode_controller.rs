mod common;

use chrono::Duration;
use common::{minutes_after, profile_with, t0};
use fitdash::core::mode::{LockReason, Outcome, can_switch, lock_status, select_mode};
use fitdash::models::{Mode, Profile};

// ── first selection ──────────────────────────────────────────────────────────

#[test]
fn test_unset_mode_always_allowed() {
    for mode in Mode::ALL {
        let profile = Profile {
            mode_switch_count: 5,
            ..Profile::default()
        };
        let sel = select_mode(&profile, mode, t0());
        assert!(sel.allowed());
        assert_eq!(sel.outcome, Outcome::Assigned);
        assert_eq!(sel.profile.mode, Some(mode));
        assert_eq!(sel.profile.mode_since, Some(t0()));
        assert_eq!(sel.profile.mode_switch_count, 0);
    }
}

#[test]
fn test_mode_since_is_stamped_at_millisecond_precision() {
    let now = t0() + Duration::nanoseconds(2_999_999);
    let sel = select_mode(&Profile::default(), Mode::WeightLoss, now);
    assert_eq!(sel.profile.mode_since, Some(t0() + Duration::milliseconds(2)));
}

#[test]
fn test_first_selection_keeps_identity() {
    let profile = Profile::with_identity("Ada", "ada@example.com", "");
    let sel = select_mode(&profile, Mode::MuscleGain, t0());
    assert_eq!(sel.profile.name, "Ada");
    assert_eq!(sel.profile.email, "ada@example.com");
}

// ── switching ────────────────────────────────────────────────────────────────

#[test]
fn test_switch_within_window_consumes_switch() {
    let profile = profile_with(Mode::WeightLoss, t0(), 0);
    let sel = select_mode(&profile, Mode::WeightGain, minutes_after(t0(), 5));
    assert!(sel.allowed());
    assert_eq!(sel.outcome, Outcome::Switched);
    assert_eq!(sel.profile.mode, Some(Mode::WeightGain));
    assert_eq!(sel.profile.mode_switch_count, 1);
    // modeSince is not re-stamped on a switch
    assert_eq!(sel.profile.mode_since, Some(t0()));
}

#[test]
fn test_same_mode_still_consumes_switch() {
    let profile = profile_with(Mode::Maintenance, t0(), 0);
    let sel = select_mode(&profile, Mode::Maintenance, minutes_after(t0(), 1));
    assert!(sel.allowed());
    assert_eq!(sel.profile.mode_switch_count, 1);

    let again = select_mode(&sel.profile, Mode::Maintenance, minutes_after(t0(), 2));
    assert!(!again.allowed());
}

#[test]
fn test_exhausted_switches_reject_regardless_of_time() {
    for elapsed in [0, 1, 9, 10, 60, 60 * 24] {
        let profile = profile_with(Mode::WeightLoss, t0(), 1);
        let sel = select_mode(&profile, Mode::WeightGain, minutes_after(t0(), elapsed));
        assert!(!sel.allowed(), "elapsed {} minutes", elapsed);
        assert_eq!(sel.outcome, Outcome::Locked(LockReason::SwitchesExhausted));
        assert_eq!(sel.profile, profile);
    }
}

#[test]
fn test_expired_window_rejects() {
    for elapsed in [10, 11, 120] {
        let profile = profile_with(Mode::WeightLoss, t0(), 0);
        let sel = select_mode(&profile, Mode::MuscleGain, minutes_after(t0(), elapsed));
        assert!(!sel.allowed(), "elapsed {} minutes", elapsed);
        assert_eq!(sel.outcome, Outcome::Locked(LockReason::WindowExpired));
        assert_eq!(sel.profile, profile);
    }
}

#[test]
fn test_window_boundary_is_exclusive() {
    let profile = profile_with(Mode::WeightLoss, t0(), 0);
    let just_inside = t0() + chrono::Duration::minutes(10) - chrono::Duration::milliseconds(1);
    assert!(select_mode(&profile, Mode::WeightGain, just_inside).allowed());
    assert!(!select_mode(&profile, Mode::WeightGain, minutes_after(t0(), 10)).allowed());
}

#[test]
fn test_mode_without_timestamp_is_locked() {
    let profile = Profile {
        mode: Some(Mode::WeightGain),
        mode_since: None,
        mode_switch_count: 0,
        ..Profile::default()
    };
    let sel = select_mode(&profile, Mode::WeightLoss, t0());
    assert_eq!(sel.outcome, Outcome::Locked(LockReason::WindowExpired));
}

// ── lock status ──────────────────────────────────────────────────────────────

#[test]
fn test_can_switch_matches_select_mode() {
    let open = profile_with(Mode::WeightLoss, t0(), 0);
    assert!(can_switch(&open, minutes_after(t0(), 3)));
    assert!(!can_switch(&open, minutes_after(t0(), 15)));
    assert!(can_switch(&Profile::default(), t0()));
}

#[test]
fn test_lock_status_reports_remaining_window() {
    let profile = profile_with(Mode::WeightLoss, t0(), 0);
    let status = lock_status(&profile, minutes_after(t0(), 4));
    assert!(status.can_switch);
    assert_eq!(status.switches_used, 0);
    assert_eq!(status.switches_allowed, 1);
    assert_eq!(status.window_remaining_secs, Some(6 * 60));
    assert!(status.locked_reason.is_none());

    let expired = lock_status(&profile, minutes_after(t0(), 30));
    assert!(!expired.can_switch);
    assert_eq!(expired.window_remaining_secs, None);
    assert_eq!(expired.locked_reason, Some(LockReason::WindowExpired));
}

#[test]
fn test_lock_status_for_new_user() {
    let status = lock_status(&Profile::default(), t0());
    assert!(status.can_switch);
    assert!(status.mode.is_none());
    assert!(status.window_remaining_secs.is_none());
}

#[test]
fn test_mode_parse_accepts_common_spellings() {
    assert_eq!("weight-loss".parse::<Mode>().unwrap(), Mode::WeightLoss);
    assert_eq!("Weight Gain".parse::<Mode>().unwrap(), Mode::WeightGain);
    assert_eq!("muscle_gain".parse::<Mode>().unwrap(), Mode::MuscleGain);
    assert_eq!("MAINTENANCE".parse::<Mode>().unwrap(), Mode::Maintenance);
    assert!("bulking".parse::<Mode>().is_err());
}
