use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::profile::{DEFAULT_EMAIL, DEFAULT_NAME, Profile};

pub const DEFAULT_STORAGE_KEY: &str = "fitness_data_v2";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Identity,
    #[serde(default)]
    pub storage: Storage,
}

/// Identity used when a fresh profile is created.
#[derive(Debug, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}
fn default_email() -> String {
    DEFAULT_EMAIL.to_string()
}
fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: default_name(),
            email: default_email(),
            avatar: String::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for Storage {
    fn default() -> Self {
        Self { key: default_key() }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::OpenOptions;
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)?;
            file.write_all(contents.as_bytes())?;

            // An existing file keeps its old mode through open(); fix it up.
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                std::fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a `config set` style assignment.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "name" | "profile.name" => self.profile.name = value.to_string(),
            "email" | "profile.email" => self.profile.email = value.to_string(),
            "avatar" | "profile.avatar" => self.profile.avatar = value.to_string(),
            "storage.key" => {
                if value.trim().is_empty() {
                    anyhow::bail!("storage.key must not be empty");
                }
                self.storage.key = value.to_string();
            }
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    /// A first-run profile carrying the configured identity.
    pub fn fresh_profile(&self) -> Profile {
        Profile::with_identity(&self.profile.name, &self.profile.email, &self.profile.avatar)
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("FITDASH_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .map(|h| h.join(".fitdash"))
            .unwrap_or_else(|| PathBuf::from(".fitdash"))
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
