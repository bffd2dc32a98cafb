mod common;

use common::{approx, day, input, t0};
use fitdash::core::activity::{
    ActivityInput, delete_schedule_item, log_activity, mark_all_read, rates,
};
use fitdash::core::seed::{day_label, seed_stats, theme};
use fitdash::models::{ActivityType, Mode, Notification, Stats};

fn log(stats: &Stats, activity_type: ActivityType, duration: &str, d: u32) -> Stats {
    let th = theme(Some(Mode::WeightLoss));
    log_activity(stats, &[], &input(activity_type, duration), day(d), &th, t0()).stats
}

// ── rates ────────────────────────────────────────────────────────────────────

#[test]
fn test_fitness_thirty_minutes() {
    let th = theme(None);
    let out = log_activity(
        &Stats::default(),
        &[],
        &input(ActivityType::Fitness, "30 min"),
        day(16),
        &th,
        t0(),
    );
    assert!(approx(out.calories_burned, 300.0));
    assert_eq!(out.steps_taken, 3900);
    assert!(approx(out.stats.total_distance_km, 3900.0 * 0.0008));
}

#[test]
fn test_oversized_duration_saturates() {
    let th = theme(None);
    let out = log_activity(
        &Stats::default(),
        &[],
        &input(ActivityType::Fitness, "99999999999 min"),
        day(16),
        &th,
        t0(),
    );
    assert_eq!(out.duration_minutes, u32::MAX);
    assert_eq!(out.steps_taken, u64::from(u32::MAX) * 130);
    assert_eq!(out.item.duration, "99999999999 min");
}

#[test]
fn test_rate_table() {
    assert_eq!(rates(ActivityType::Fitness), (10.0, 130));
    assert_eq!(rates(ActivityType::Wellness), (3.5, 10));
    assert_eq!(rates(ActivityType::Nutrition), (0.0, 0));
    assert_eq!(rates(ActivityType::Other), (5.0, 100));
}

#[test]
fn test_wellness_fractional_calories() {
    let stats = log(&Stats::default(), ActivityType::Wellness, "45 min", 16);
    assert!(approx(stats.total_calories, 157.5));
    assert_eq!(stats.total_steps, 450);
}

#[test]
fn test_unrecognized_type_uses_other_rates() {
    let activity_type = ActivityType::parse("walking");
    assert_eq!(activity_type, ActivityType::Other);
    let stats = log(&Stats::default(), activity_type, "10 min", 16);
    assert!(approx(stats.total_calories, 50.0));
    assert_eq!(stats.total_steps, 1000);
}

#[test]
fn test_nutrition_leaves_totals_unchanged() {
    let start = log(&Stats::default(), ActivityType::Fitness, "20 min", 16);
    let th = theme(Some(Mode::WeightLoss));
    for duration in ["", "15 min", "1 hr", "abc"] {
        let out = log_activity(
            &start,
            &[],
            &input(ActivityType::Nutrition, duration),
            day(16),
            &th,
            t0(),
        );
        assert!(approx(out.stats.total_calories, start.total_calories));
        assert_eq!(out.stats.total_steps, start.total_steps);
        assert!(approx(out.stats.total_distance_km, start.total_distance_km));
        assert!(out.notification.is_none());
        assert_eq!(out.schedule.len(), 1);
    }
}

#[test]
fn test_unparsable_duration_defaults_to_thirty() {
    let stats = log(&Stats::default(), ActivityType::Fitness, "soon", 16);
    assert!(approx(stats.total_calories, 300.0));
}

// ── schedule entries ─────────────────────────────────────────────────────────

#[test]
fn test_schedule_item_fields() {
    let th = theme(Some(Mode::MuscleGain));
    let out = log_activity(
        &Stats::default(),
        &[],
        &input(ActivityType::Fitness, ""),
        day(16),
        &th,
        t0(),
    );
    assert_eq!(out.schedule.len(), 1);
    let item = &out.schedule[0];
    assert_eq!(item.title, "Evening Run");
    assert_eq!(item.time, "18:30");
    assert_eq!(item.duration, "30 min");
    assert_eq!(item.activity_type, ActivityType::Fitness);
    assert_eq!(item.color, "bg-orange-100 text-orange-700");
    assert!(!item.id.is_empty());
    assert_eq!(&out.item, item);
}

#[test]
fn test_schedule_colors_per_type() {
    let th = theme(Some(Mode::WeightGain));
    let color = |t: ActivityType| {
        log_activity(&Stats::default(), &[], &input(t, "15 min"), day(16), &th, t0())
            .item
            .color
    };
    assert_eq!(color(ActivityType::Fitness), th.secondary);
    assert_eq!(color(ActivityType::Wellness), "bg-purple-100 text-purple-700");
    assert_eq!(color(ActivityType::Nutrition), "bg-green-100 text-green-700");
    assert_eq!(color(ActivityType::Other), "bg-slate-100 text-slate-700");
}

#[test]
fn test_schedule_ids_are_unique_and_appended() {
    let th = theme(None);
    let first = log_activity(
        &Stats::default(),
        &[],
        &input(ActivityType::Fitness, "15 min"),
        day(16),
        &th,
        t0(),
    );
    let second = log_activity(
        &first.stats,
        &first.schedule,
        &ActivityInput {
            title: "Yoga".into(),
            ..input(ActivityType::Wellness, "15 min")
        },
        day(16),
        &th,
        t0(),
    );
    assert_eq!(second.schedule.len(), 2);
    assert_eq!(second.schedule[0].title, "Evening Run");
    assert_eq!(second.schedule[1].title, "Yoga");
    assert_ne!(second.schedule[0].id, second.schedule[1].id);
}

#[test]
fn test_delete_schedule_item_only_removes_match() {
    let th = theme(None);
    let a = log_activity(
        &Stats::default(),
        &[],
        &input(ActivityType::Fitness, "15 min"),
        day(16),
        &th,
        t0(),
    );
    let b = log_activity(
        &a.stats,
        &a.schedule,
        &input(ActivityType::Other, "15 min"),
        day(16),
        &th,
        t0(),
    );
    let mut schedule = b.schedule.clone();
    assert!(!delete_schedule_item(&mut schedule, "missing"));
    assert_eq!(schedule.len(), 2);
    assert!(delete_schedule_item(&mut schedule, &a.item.id));
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].id, b.item.id);
}

// ── notifications ────────────────────────────────────────────────────────────

#[test]
fn test_notification_mentions_burned_amount() {
    let th = theme(None);
    let out = log_activity(
        &Stats::default(),
        &[],
        &input(ActivityType::Fitness, "45 min"),
        day(16),
        &th,
        t0(),
    );
    let note = out.notification.expect("notification for burned calories");
    assert_eq!(note.text, "Activity added! Burned 450 kcal.");
    assert!(note.unread);
    assert_eq!(note.created_at, t0());
}

#[test]
fn test_mark_all_read_counts_changes() {
    let mut notes = vec![
        Notification::new("a".into(), t0()),
        Notification::new("b".into(), t0()),
    ];
    notes[0].unread = false;
    assert_eq!(mark_all_read(&mut notes), 1);
    assert!(notes.iter().all(|n| !n.unread));
    assert_eq!(mark_all_read(&mut notes), 0);
}

// ── daily history ────────────────────────────────────────────────────────────

#[test]
fn test_same_day_accumulates_single_entry() {
    let mut stats = Stats::default();
    for _ in 0..4 {
        stats = log(&stats, ActivityType::Fitness, "10 min", 16);
    }
    assert_eq!(stats.daily_history.len(), 1);
    assert_eq!(stats.daily_history[0].label, "Oct 16");
    assert!(approx(stats.daily_history[0].calories, 400.0));
    assert_eq!(stats.daily_history[0].steps, 5200);
}

#[test]
fn test_eleven_days_keeps_most_recent_ten() {
    let mut stats = Stats::default();
    for d in 1..=11 {
        stats = log(&stats, ActivityType::Other, "10 min", d);
    }
    assert_eq!(stats.daily_history.len(), 10);
    let labels: Vec<String> = stats.daily_history.iter().map(|h| h.label.clone()).collect();
    let expected: Vec<String> = (2..=11).map(|d| day_label(day(d))).collect();
    assert_eq!(labels, expected);
    // totals are not capped with the history
    assert!(approx(stats.total_calories, 11.0 * 50.0));
}

#[test]
fn test_seeded_today_entry_is_reused() {
    let seeded = seed_stats(Mode::WeightLoss, day(16));
    let stats = log(&seeded, ActivityType::Fitness, "45 min", 16);
    assert_eq!(stats.daily_history.len(), 1);
    assert!(approx(stats.daily_history[0].calories, 450.0));
    assert_eq!(stats.goals, seeded.goals);
    assert_eq!(stats.macros, seeded.macros);
}
