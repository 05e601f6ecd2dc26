use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DATABASE_FILENAME: &str = "students.db";

/// Configuration for roster, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Database file to use instead of the default location
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Empty the student table every time the application starts (development only)
    #[serde(default)]
    pub wipe_on_start: bool,
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Resolve the database file: explicit setting first, then `<data dir>/students.db`.
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| data_dir.join(DATABASE_FILENAME))
    }

    pub fn keys() -> &'static [&'static str] {
        &["database", "wipe-on-start"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "database" => Some(
                self.database
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(default)".to_string()),
            ),
            "wipe-on-start" => Some(self.wipe_on_start.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "database" => {
                let value = value.trim();
                self.database = if value.is_empty() || value == "default" {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "wipe-on-start" => {
                self.wipe_on_start = parse_bool(value).ok_or_else(|| {
                    RosterError::Config(format!("Expected true or false, got '{}'", value))
                })?;
                Ok(())
            }
            other => Err(RosterError::Config(format!("Unknown config key: {}", other))),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
