use serde::{Deserialize, Serialize};

/// Maximum number of days kept in the rolling history.
pub const HISTORY_DAYS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macro {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl Macro {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            value: 0.0,
            color: color.to_string(),
        }
    }
}

/// A progress bar towards a mode-specific target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalBar {
    pub label: String,
    pub current: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub color: String,
    pub shadow: String,
}

impl GoalBar {
    /// Fraction of the target reached, clamped to `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayActivity {
    pub label: String,
    pub calories: f64,
    pub steps: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub total_calories: f64,
    #[serde(default)]
    pub total_steps: u64,
    #[serde(default)]
    pub total_distance_km: f64,
    /// Litres.
    #[serde(default)]
    pub water: f64,
    #[serde(default)]
    pub macros: Vec<Macro>,
    #[serde(default)]
    pub goals: Vec<GoalBar>,
    /// Oldest first, at most one entry per day label.
    #[serde(default)]
    pub daily_history: Vec<DayActivity>,
}

impl Default for Stats {
    /// Neutral stats for a user who has not picked a mode yet.
    fn default() -> Self {
        Self {
            total_calories: 0.0,
            total_steps: 0,
            total_distance_km: 0.0,
            water: 0.0,
            macros: vec![
                Macro::new("Protein", "#e2e8f0"),
                Macro::new("Carbs", "#e2e8f0"),
                Macro::new("Fats", "#e2e8f0"),
            ],
            goals: Vec::new(),
            daily_history: Vec::new(),
        }
    }
}
