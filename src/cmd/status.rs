use anyhow::Result;
use chrono::{NaiveDate, Utc};

use fitdash::models::config::Config;
use fitdash::output::human;

use super::{open_session, print_success, today};

pub fn run(date: Option<NaiveDate>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let session = open_session(&config)?;
    let status = fitdash::core::status::compute(
        session.state(),
        session.is_first_run(),
        Utc::now(),
        today(date),
    );

    if human_flag {
        println!("{}", human::format_status(&status));
    } else {
        print_success("status", serde_json::to_value(&status)?, &[])?;
    }
    Ok(())
}
