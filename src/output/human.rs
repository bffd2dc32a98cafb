use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};

use crate::core::energy::EnergyEstimate;
use crate::core::mode::{LockStatus, MAX_SWITCHES, SWITCH_WINDOW_MINUTES};
use crate::core::status::StatusData;
use crate::models::{Notification, ScheduleItem};

/// One-line summary of the mode lock.
pub fn format_lock(lock: &LockStatus) -> String {
    let mode = match lock.mode {
        Some(m) => m.to_string(),
        None => "not selected".to_string(),
    };
    let mut line = format!(
        "Mode: {} | switches {}/{}",
        mode, lock.switches_used, lock.switches_allowed
    );
    if lock.mode.is_some() {
        if lock.can_switch {
            let secs = lock.window_remaining_secs.unwrap_or(0);
            line.push_str(&format!(
                " | {}",
                format!("can switch ({}m {}s left)", secs / 60, secs % 60).green()
            ));
        } else {
            line.push_str(&format!(" | {}", "locked".red()));
        }
    }
    line
}

pub fn format_schedule(items: &[ScheduleItem]) -> String {
    if items.is_empty() {
        return "No activities scheduled".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Time", "Title", "Type", "Duration", "ID"]);
    for item in items {
        table.add_row(vec![
            item.time.clone(),
            item.title.clone(),
            item.activity_type.to_string(),
            item.duration.clone(),
            item.id.clone(),
        ]);
    }
    table.to_string()
}

pub fn format_notification(n: &Notification) -> String {
    let ts = n.created_at.format("%Y-%m-%d %H:%M");
    if n.unread {
        format!("{} {} {}", "*".yellow(), ts, n.text.bold())
    } else {
        format!("  {} {}", ts, n.text)
    }
}

/// Pretty-print the dashboard overview.
pub fn format_status(s: &StatusData) -> String {
    let mut out = format!("=== Fitness Tracker — {} ===\n", s.date);
    out.push_str(&format!("{} <{}>\n", s.name, s.email));
    out.push_str(&format_lock(&s.lock));
    out.push('\n');
    if s.onboarding {
        out.push_str(&format!(
            "{}\n",
            "Select a goal with `fitdash mode set <mode>` to get started.".yellow()
        ));
    }

    out.push_str(&format!(
        "\nCalories: {} kcal | Steps: {} | Distance: {} km | Water: {} L\n",
        s.totals.calories, s.totals.steps, s.totals.distance_km, s.totals.water_l
    ));

    if !s.goals.is_empty() {
        out.push_str("\nGoals:\n");
        for g in &s.goals {
            out.push_str(&format!(
                "  {}: {}/{} {} ({}%)\n",
                g.goal.label,
                g.goal.current,
                g.goal.max,
                g.goal.unit.as_deref().unwrap_or(""),
                g.percent
            ));
        }
    }

    if !s.history.is_empty() {
        out.push_str("\nLast days:\n");
        for d in &s.history {
            out.push_str(&format!(
                "  {:>6}  {} kcal  {} steps\n",
                d.label, d.calories, d.steps
            ));
        }
    }

    if let Some(diet) = &s.diet {
        out.push_str(&format!("\nRecommended diet: {}\n", diet.title.bold()));
        for item in diet.items {
            out.push_str(&format!("  - {}\n", item));
        }
    }

    out.push_str(&format!(
        "\nScheduled: {} | Unread notifications: {}",
        s.scheduled, s.unread_notifications
    ));
    out
}

/// The informational panel: energy formulas and the mode lock rules.
pub fn format_info(estimate: Option<&EnergyEstimate>) -> String {
    let mut out = String::from("Basal Metabolic Rate (Mifflin-St Jeor):\n");
    out.push_str("  P = (10 x weight) + (6.25 x height) - (5 x age) + 5\n");
    out.push_str("Total Daily Energy Expenditure:\n");
    out.push_str("  Sedentary: BMR x 1.2\n  Light: BMR x 1.375\n");
    out.push_str("  Moderate: BMR x 1.55\n  Active: BMR x 1.725\n");
    if let Some(e) = estimate {
        out.push_str(&format!("\nYour BMR: {} kcal/day\n", e.bmr));
        for (level, kcal) in &e.tdee {
            out.push_str(&format!("  {}: {} kcal/day\n", level, kcal));
        }
    }
    out.push_str(&format!(
        "\nMode locking: you can switch modes only {} time(s), within the first {} minutes.",
        MAX_SWITCHES, SWITCH_WINDOW_MINUTES
    ));
    out
}
