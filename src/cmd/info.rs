use anyhow::Result;
use serde_json::json;

use fitdash::core::energy::{self, ActivityLevel, Sex};
use fitdash::core::mode::{MAX_SWITCHES, SWITCH_WINDOW_MINUTES};
use fitdash::output::human;

use super::print_success;

pub fn run(
    weight: Option<f64>,
    height: Option<f64>,
    age: Option<u32>,
    sex: Option<&str>,
    activity: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    let estimate = match (weight, height, age) {
        (Some(w), Some(h), Some(a)) => {
            if w <= 0.0 || h <= 0.0 {
                anyhow::bail!("weight and height must be positive");
            }
            let sex: Sex = sex.unwrap_or("male").parse()?;
            let level = activity.map(str::parse::<ActivityLevel>).transpose()?;
            let estimate = energy::estimate(w, h, a, sex);
            Some(match level {
                Some(level) => estimate.only(level),
                None => estimate,
            })
        }
        _ => None,
    };

    if human_flag {
        println!("{}", human::format_info(estimate.as_ref()));
    } else {
        print_success(
            "info",
            json!({
                "formulas": {
                    "bmr": "10*weight_kg + 6.25*height_cm - 5*age + 5 (male) / - 161 (female)",
                    "tdee": { "sedentary": 1.2, "light": 1.375, "moderate": 1.55, "active": 1.725 },
                },
                "mode_lock": {
                    "max_switches": MAX_SWITCHES,
                    "window_minutes": SWITCH_WINDOW_MINUTES,
                },
                "estimate": estimate,
            }),
            &[],
        )?;
    }
    Ok(())
}
