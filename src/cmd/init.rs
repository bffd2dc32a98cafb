use anyhow::Result;
use std::io::{self, Write};

use fitdash::models::config::Config;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if !skip {
        println!("Fitness Tracker — Initial Setup\n");

        let name = prompt_string(&format!("Name [{}]", config.profile.name))?;
        if !name.is_empty() {
            config.profile.name = name;
        }
        let email = prompt_string(&format!("Email [{}]", config.profile.email))?;
        if !email.is_empty() {
            config.profile.email = email;
        }

        config.save()?;
        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
        println!("Next: pick a goal with `fitdash mode set <mode>`.");
    } else {
        config.save()?;
        println!("Config initialized with defaults at {:?}", Config::path());
    }

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}
