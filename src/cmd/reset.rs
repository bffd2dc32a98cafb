use anyhow::Result;
use serde_json::json;

use fitdash::core::session::Session;
use fitdash::models::config::Config;
use fitdash::store::SqliteStore;

use super::print_success;

pub fn run(yes: bool, human_flag: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("reset deletes all stored state; pass --yes to confirm");
    }
    let config = Config::load()?;
    let store = SqliteStore::open(&Config::db_path())?;
    let (session, existed) =
        Session::discard(store, &config.storage.key, config.fresh_profile())?;

    if human_flag {
        if existed {
            println!("All data cleared.");
        } else {
            println!("Nothing to clear.");
        }
    } else {
        print_success(
            "reset",
            json!({ "cleared": existed, "profile": session.state().profile }),
            &[],
        )?;
    }
    Ok(())
}
