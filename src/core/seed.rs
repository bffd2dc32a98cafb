use chrono::NaiveDate;
use serde::Serialize;

use crate::models::stats::{DayActivity, GoalBar, Macro, Stats};
use crate::models::{ActivityType, Mode};

/// Colour classes used when rendering a mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub gradient: &'static str,
}

/// Theme for a mode. An unset mode renders with the Maintenance theme.
pub fn theme(mode: Option<Mode>) -> Theme {
    match mode {
        Some(Mode::WeightLoss) => Theme {
            primary: "text-emerald-600",
            secondary: "bg-emerald-100 text-emerald-700",
            accent: "bg-emerald-500",
            background: "bg-emerald-50/30",
            gradient: "from-emerald-400 to-teal-500",
        },
        Some(Mode::WeightGain) => Theme {
            primary: "text-blue-600",
            secondary: "bg-blue-100 text-blue-700",
            accent: "bg-blue-500",
            background: "bg-blue-50/30",
            gradient: "from-blue-400 to-indigo-500",
        },
        Some(Mode::MuscleGain) => Theme {
            primary: "text-orange-600",
            secondary: "bg-orange-100 text-orange-700",
            accent: "bg-orange-500",
            background: "bg-orange-50/30",
            gradient: "from-orange-400 to-red-500",
        },
        Some(Mode::Maintenance) | None => Theme {
            primary: "text-slate-600",
            secondary: "bg-slate-100 text-slate-700",
            accent: "bg-slate-500",
            background: "bg-slate-50/30",
            gradient: "from-slate-400 to-gray-500",
        },
    }
}

/// Colour tag for a schedule entry. Fitness follows the active theme.
pub fn schedule_color(activity_type: ActivityType, theme: &Theme) -> &'static str {
    match activity_type {
        ActivityType::Fitness => theme.secondary,
        ActivityType::Wellness => "bg-purple-100 text-purple-700",
        ActivityType::Nutrition => "bg-green-100 text-green-700",
        ActivityType::Other => "bg-slate-100 text-slate-700",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DietSuggestion {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub fn diet(mode: Mode) -> DietSuggestion {
    match mode {
        Mode::WeightLoss => DietSuggestion {
            title: "Lean & Green",
            items: &[
                "Leafy Greens (Spinach, Kale)",
                "Lean Protein (Chicken, Tofu)",
                "Berries (Low GI)",
                "Whole Grains (Quinoa)",
            ],
        },
        Mode::WeightGain => DietSuggestion {
            title: "High Calorie & Protein",
            items: &[
                "Nuts & Nut Butters",
                "Avocados",
                "Red Meat (Steak)",
                "Complex Carbs (Oats, Rice)",
            ],
        },
        Mode::MuscleGain => DietSuggestion {
            title: "Protein Power",
            items: &[
                "Eggs & Egg Whites",
                "Chicken Breast",
                "Greek Yogurt",
                "Protein Shakes",
                "Sweet Potatoes",
            ],
        },
        Mode::Maintenance => DietSuggestion {
            title: "Balanced Diet",
            items: &[
                "Mixed Vegetables",
                "Fish (Salmon)",
                "Fruits",
                "Moderate Carbs",
            ],
        },
    }
}

/// Day label used as the history key, e.g. `Oct 6`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn goal(label: &str, max: f64, unit: &str, color: &str) -> GoalBar {
    GoalBar {
        label: label.to_string(),
        current: 0.0,
        max,
        unit: Some(unit.to_string()),
        color: color.to_string(),
        shadow: format!("shadow-{}/50", color.trim_start_matches("bg-")),
    }
}

/// Zeroed stats shaped for `mode`, with today's history slot opened.
pub fn seed_stats(mode: Mode, today: NaiveDate) -> Stats {
    let (macros, goals) = match mode {
        Mode::WeightLoss => (
            [
                Macro::new("Protein", "#10b981"),
                Macro::new("Carbs", "#34d399"),
                Macro::new("Fats", "#6ee7b7"),
            ],
            vec![
                goal("Cardio Goal", 60.0, "min", "bg-emerald-500"),
                goal("Calorie Limit", 1800.0, "kcal", "bg-emerald-500"),
            ],
        ),
        Mode::WeightGain => (
            [
                Macro::new("Protein", "#3b82f6"),
                Macro::new("Carbs", "#60a5fa"),
                Macro::new("Fats", "#93c5fd"),
            ],
            vec![
                goal("Calorie Goal", 3200.0, "kcal", "bg-blue-500"),
                goal("Protein Target", 200.0, "g", "bg-blue-400"),
            ],
        ),
        Mode::MuscleGain | Mode::Maintenance => (
            [
                Macro::new("Protein", "#f97316"),
                Macro::new("Carbs", "#fb923c"),
                Macro::new("Fats", "#fdba74"),
            ],
            vec![
                goal("Protein Goal", 220.0, "g", "bg-orange-500"),
                goal("Workout Time", 90.0, "min", "bg-orange-500"),
            ],
        ),
    };

    Stats {
        total_calories: 0.0,
        total_steps: 0,
        total_distance_km: 0.0,
        water: 0.0,
        macros: macros.to_vec(),
        goals,
        daily_history: vec![DayActivity {
            label: day_label(today),
            calories: 0.0,
            steps: 0,
        }],
    }
}
