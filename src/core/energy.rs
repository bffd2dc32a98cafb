use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => anyhow::bail!("invalid sex: {} (expected male/female)", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Light => write!(f, "light"),
            Self::Moderate => write!(f, "moderate"),
            Self::Active => write!(f, "active"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            _ => anyhow::bail!(
                "invalid activity level: {} (expected sedentary/light/moderate/active)",
                s
            ),
        }
    }
}

/// Resting energy in kcal/day (Mifflin-St Jeor).
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn tdee(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * level.multiplier()
}

#[derive(Debug, Serialize)]
pub struct EnergyEstimate {
    pub bmr: f64,
    pub tdee: Vec<(ActivityLevel, f64)>,
}

impl EnergyEstimate {
    /// Keep only the TDEE row for `level`.
    pub fn only(mut self, level: ActivityLevel) -> Self {
        self.tdee.retain(|(l, _)| *l == level);
        self
    }
}

/// BMR and TDEE for every activity level, rounded to whole kcal.
pub fn estimate(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> EnergyEstimate {
    let b = bmr(weight_kg, height_cm, age_years, sex);
    EnergyEstimate {
        bmr: b.round(),
        tdee: ActivityLevel::ALL
            .iter()
            .map(|l| (*l, tdee(b, *l).round()))
            .collect(),
    }
}
