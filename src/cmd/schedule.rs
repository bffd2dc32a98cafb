use anyhow::Result;
use serde_json::json;

use fitdash::models::config::Config;
use fitdash::output::human;

use super::{CommandError, open_session, print_success, print_warnings};

pub fn run_list(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let session = open_session(&config)?;
    let items = &session.state().schedule;

    if human_flag {
        println!("{}", human::format_schedule(items));
    } else {
        print_success("schedule", json!({ "entries": items }), &[])?;
    }
    Ok(())
}

pub fn run_remove(id: &str, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let mut session = open_session(&config)?;
    if !session.delete_schedule_item(id) {
        return Err(CommandError::ScheduleItemNotFound(id.to_string()).into());
    }

    if human_flag {
        println!("Removed {}", id);
        print_warnings(session.warnings());
    } else {
        print_success(
            "schedule",
            json!({ "removed": id, "remaining": session.state().schedule.len() }),
            session.warnings(),
        )?;
    }
    Ok(())
}
