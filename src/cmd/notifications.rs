use anyhow::Result;
use serde_json::json;

use fitdash::models::config::Config;
use fitdash::output::human;

use super::{open_session, print_success, print_warnings};

pub fn run(read: bool, clear: bool, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let mut session = open_session(&config)?;

    let changed = if clear {
        session.clear_notifications()
    } else if read {
        session.mark_notifications_read()
    } else {
        0
    };

    let notes = &session.state().notifications;
    if human_flag {
        if clear {
            println!("Cleared {} notification(s)", changed);
        } else if notes.is_empty() {
            println!("No notifications");
        } else {
            for n in notes {
                println!("{}", human::format_notification(n));
            }
        }
        print_warnings(session.warnings());
    } else {
        print_success(
            "notifications",
            json!({
                "entries": notes,
                "unread": session.state().unread_count(),
                "changed": changed,
            }),
            session.warnings(),
        )?;
    }
    Ok(())
}
