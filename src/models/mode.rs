use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The user's goal category. Gates which stat template, theme and diet
/// suggestions are shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mode {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Weight Gain")]
    WeightGain,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    #[serde(rename = "Maintenance")]
    Maintenance,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::WeightLoss,
        Mode::WeightGain,
        Mode::MuscleGain,
        Mode::Maintenance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::WeightGain => "Weight Gain",
            Self::MuscleGain => "Muscle Gain",
            Self::Maintenance => "Maintenance",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "weightloss" | "loss" => Ok(Self::WeightLoss),
            "weightgain" | "gain" => Ok(Self::WeightGain),
            "musclegain" | "muscle" => Ok(Self::MuscleGain),
            "maintenance" | "maintain" => Ok(Self::Maintenance),
            _ => anyhow::bail!(
                "invalid mode: {} (expected weight-loss/weight-gain/muscle-gain/maintenance)",
                s
            ),
        }
    }
}

/// Kind of a logged activity. Anything unrecognized is `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ActivityType {
    #[default]
    Fitness,
    Wellness,
    Nutrition,
    #[serde(other)]
    Other,
}

impl ActivityType {
    /// Lenient parse: unknown input maps to `Other` instead of failing.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "fitness" => Self::Fitness,
            "wellness" => Self::Wellness,
            "nutrition" => Self::Nutrition,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fitness => write!(f, "Fitness"),
            Self::Wellness => write!(f, "Wellness"),
            Self::Nutrition => write!(f, "Nutrition"),
            Self::Other => write!(f, "Other"),
        }
    }
}
