use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mode::Mode;

pub const DEFAULT_NAME: &str = "Guest";
pub const DEFAULT_EMAIL: &str = "guest@fitness.app";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub mode: Option<Mode>,
    /// When the mode was first assigned. Stored as epoch milliseconds.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub mode_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub mode_switch_count: u32,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_email() -> String {
    DEFAULT_EMAIL.to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: default_email(),
            avatar: String::new(),
            mode: None,
            mode_since: None,
            mode_switch_count: 0,
        }
    }
}

impl Profile {
    pub fn with_identity(name: &str, email: &str, avatar: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            avatar: avatar.to_string(),
            ..Self::default()
        }
    }
}
