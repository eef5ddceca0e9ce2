use crate::errors::{AppError, AppResult};
use crate::models::mode::{ColumnLayout, ModeConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Permitted slack in minutes between applied and objective boundaries.
    #[serde(default = "default_threshold")]
    pub threshold_minutes: u32,

    /// Ordered: mode detection walks this list front to back and the
    /// first matching table id wins.
    #[serde(default = "default_modes")]
    pub modes: Vec<ModeConfig>,
}

fn default_threshold() -> u32 {
    30
}

fn default_columns() -> ColumnLayout {
    ColumnLayout {
        id_start: 0,
        id_end: 1,
        pc_start: 2,
        pc_end: 3,
        ap_start: 4,
        ap_end: 5,
    }
}

fn default_modes() -> Vec<ModeConfig> {
    vec![
        ModeConfig {
            name: "approver".to_string(),
            label: "Approver mode".to_string(),
            table_id: "my-specific-data-table".to_string(),
            columns: default_columns(),
        },
        ModeConfig {
            name: "user".to_string(),
            label: "User mode".to_string(),
            table_id: "user-data-table".to_string(),
            columns: default_columns(),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold_minutes: default_threshold(),
            modes: default_modes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tablecheck")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tablecheck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tablecheck.conf")
    }

    /// Load configuration from the default location, falling back to the
    /// built-in defaults when no file exists.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;
        Ok(())
    }

    /// Create the config directory and write the default configuration.
    pub fn init_all(is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            Self::default().save_to(&Self::config_file())?;
        }
        Ok(())
    }

    /// Find a mode by name.
    pub fn mode(&self, name: &str) -> AppResult<&ModeConfig> {
        self.modes
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| AppError::UnknownMode(name.to_string()))
    }

    /// Sanity checks for hand-edited files. Returns one message per
    /// problem found.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.modes.is_empty() {
            problems.push("no modes configured".to_string());
        }

        for (i, m) in self.modes.iter().enumerate() {
            if m.name.trim().is_empty() {
                problems.push(format!("mode #{} has an empty name", i + 1));
            }
            if m.table_id.trim().is_empty() {
                problems.push(format!("mode '{}' has an empty table_id", m.name));
            }
            if self.modes[..i].iter().any(|p| p.name == m.name) {
                problems.push(format!("duplicate mode name '{}'", m.name));
            }
        }

        problems
    }
}
