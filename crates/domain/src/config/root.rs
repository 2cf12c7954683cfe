use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::jobs::JobsConfig;
use super::logging::LoggingConfig;
use super::runtime::RuntimeConfig;
use crate::timestamp::MAX_WINDOW_DAYS;

const LOCAL_CONFIG_PATH: &str = "crm-jobs.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/crm-jobs/config.toml";

/// Main configuration structure for the CRM housekeeping jobs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub runtime: RuntimeConfig,

    #[serde(default)]
    pub jobs: JobsConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. crm-jobs.toml in current directory
    /// 3. /etc/crm-jobs/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(workdir) = overrides.workdir {
            self.runtime.workdir = Some(workdir);
        }
        if let Some(days) = overrides.inactivity_days {
            self.jobs.cleanup.inactivity_days = days;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Database path cannot be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.jobs.cleanup.inactivity_days == 0 {
            return Err(ConfigError::Validation(
                "jobs.cleanup.inactivity_days must be at least 1".to_string(),
            ));
        }
        if self.jobs.cleanup.inactivity_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::Validation(format!(
                "jobs.cleanup.inactivity_days cannot exceed {MAX_WINDOW_DAYS}"
            )));
        }
        if self.jobs.reminders.window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::Validation(format!(
                "jobs.reminders.window_days cannot exceed {MAX_WINDOW_DAYS}"
            )));
        }
        if self.jobs.restock.increment <= 0 {
            return Err(ConfigError::Validation(
                "jobs.restock.increment must be positive".to_string(),
            ));
        }

        let jobs = &self.jobs;
        let schedules = [
            ("cleanup", jobs.cleanup.interval_secs, &jobs.cleanup.log_path),
            ("reminders", jobs.reminders.interval_secs, &jobs.reminders.log_path),
            ("restock", jobs.restock.interval_secs, &jobs.restock.log_path),
            ("report", jobs.report.interval_secs, &jobs.report.log_path),
            ("heartbeat", jobs.heartbeat.interval_secs, &jobs.heartbeat.log_path),
        ];
        for (name, interval_secs, log_path) in schedules {
            if interval_secs == 0 {
                return Err(ConfigError::Validation(format!(
                    "jobs.{name}.interval_secs cannot be 0"
                )));
            }
            if log_path.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "jobs.{name}.log_path cannot be empty"
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file that `load` would pick up
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub workdir: Option<String>,
    pub inactivity_days: Option<u32>,
}
