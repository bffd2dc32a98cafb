use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde_json::json;

use fitdash::core::activity::ActivityInput;
use fitdash::models::ActivityType;
use fitdash::models::config::Config;

use super::{open_session, print_success, print_warnings, today};

pub fn run(
    title: &str,
    activity_type: &str,
    time: &str,
    duration: &str,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    if title.trim().is_empty() {
        anyhow::bail!("activity title must not be empty");
    }
    let config = Config::load()?;
    let mut session = open_session(&config)?;
    let input = ActivityInput {
        title: title.to_string(),
        time: time.to_string(),
        duration: duration.to_string(),
        activity_type: ActivityType::parse(activity_type),
    };
    let outcome = session.log_activity(&input, Utc::now(), today(date));

    if human_flag {
        println!(
            "Logged: {} ({}, {}) | {} kcal, {} steps",
            outcome.item.title,
            outcome.item.activity_type,
            outcome.item.duration,
            outcome.calories_burned,
            outcome.steps_taken
        );
        if let Some(n) = &outcome.notification {
            println!("{}", n.text);
        }
        print_warnings(session.warnings());
    } else {
        let stats = &session.state().stats;
        print_success(
            "log",
            json!({
                "entry": outcome.item,
                "minutes": outcome.duration_minutes,
                "calories_burned": outcome.calories_burned,
                "steps_taken": outcome.steps_taken,
                "totals": {
                    "calories": stats.total_calories,
                    "steps": stats.total_steps,
                    "distance_km": stats.total_distance_km,
                },
                "notification": outcome.notification,
            }),
            session.warnings(),
        )?;
    }
    Ok(())
}
