pub mod config;
pub mod info;
pub mod init;
pub mod log;
pub mod mode;
pub mod notifications;
pub mod reset;
pub mod schedule;
pub mod status;

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use serde_json::Value;
use thiserror::Error;

use fitdash::core::mode::LockReason;
use fitdash::core::session::Session;
use fitdash::models::config::Config;
use fitdash::output;
use fitdash::store::SqliteStore;

/// Failures that map to a dedicated error code in the JSON envelope.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Mode locked! {0}.")]
    ModeLocked(LockReason),
    #[error("no scheduled activity with id {0}")]
    ScheduleItemNotFound(String),
}

impl CommandError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ModeLocked(_) => "mode_locked",
            Self::ScheduleItemNotFound(_) => "not_found",
        }
    }
}

pub fn today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Open the stored dashboard using the configured key and identity.
pub fn open_session(config: &Config) -> Result<Session<SqliteStore>> {
    let store = SqliteStore::open(&Config::db_path())?;
    let session = Session::open(
        store,
        &config.storage.key,
        config.fresh_profile(),
        Utc::now(),
    )?;
    Ok(session)
}

/// Print a success envelope, attaching any persistence warnings.
pub fn print_success(command: &str, data: Value, warnings: &[String]) -> Result<()> {
    let out = output::success_with_warnings(command, data, warnings);
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}

pub fn print_warnings(warnings: &[String]) {
    for w in warnings {
        eprintln!("warning: {}", w);
    }
}
