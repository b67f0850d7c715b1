use crate::models::settings::PlannerConfig;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "TIMETABLE_PLANNER_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Config file from `TIMETABLE_PLANNER_CONFIG`, else the platform config dir.
    pub fn from_environment() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(Self::new(path));
            }
        }

        let dirs = ProjectDirs::from("com", "TimetablePlanner", "TimetablePlanner")
            .ok_or_else(|| anyhow!("Could not determine a config directory"))?;
        Ok(Self::new(dirs.config_dir().join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config; a missing file yields the defaults.
    pub fn load(&self) -> Result<PlannerConfig> {
        if !self.path.exists() {
            log::info!(
                "No config at {}, using defaults",
                self.path.display()
            );
            return Ok(PlannerConfig::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config from {}", self.path.display()))?;
        let config: PlannerConfig = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", self.path.display()))?;

        config
            .validate()
            .map_err(|e| anyhow!("Invalid config in {}: {}", self.path.display(), e))?;

        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }

    pub fn save(&self, config: &PlannerConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid config: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(config).context("failed to serialize config")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write config to {}", self.path.display()))?;
        Ok(())
    }
}
