use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde_json::json;

use fitdash::core::mode::{Outcome, lock_status};
use fitdash::models::Mode;
use fitdash::models::config::Config;
use fitdash::output::human;

use super::{CommandError, open_session, print_success, print_warnings, today};

pub fn run_show(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let session = open_session(&config)?;
    let lock = lock_status(&session.state().profile, Utc::now());

    if human_flag {
        println!("{}", human::format_lock(&lock));
    } else {
        print_success(
            "mode",
            json!({ "lock": lock, "first_run": session.is_first_run() }),
            &[],
        )?;
    }
    Ok(())
}

pub fn run_set(mode_str: &str, date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let requested: Mode = mode_str.parse()?;
    let config = Config::load()?;
    let mut session = open_session(&config)?;
    let selection = session.select_mode(requested, Utc::now(), today(date));

    if let Outcome::Locked(reason) = selection.outcome {
        return Err(CommandError::ModeLocked(reason).into());
    }

    if human_flag {
        println!("Switched to {} mode!", requested);
        print_warnings(session.warnings());
    } else {
        print_success(
            "mode",
            json!({
                "mode": requested,
                "outcome": selection.outcome,
                "profile": session.state().profile,
                "stats": session.state().stats,
            }),
            session.warnings(),
        )?;
    }
    Ok(())
}
