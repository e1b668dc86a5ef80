//! CLI configuration
//!
//! Sources, lowest precedence first: `todolog.toml` in the working
//! directory, the environment (including `.env`), command-line flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use todolog_core::errors::{ExError, ExErrorKind};
use todolog_core::logging_facility::Profile;
use todolog_store::db::DEFAULT_DB_PATH;
use todolog_store::StoreConfig;

const CONFIG_FILE_PATH: &str = "todolog.toml";
const ENV_DATABASE: &str = "TODOLOG_DATABASE";
const ENV_LOG_FORMAT: &str = "TODOLOG_LOG_FORMAT";

/// URL form accepted for the database setting
const SQLITE_URL_PREFIX: &str = "sqlite:///";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database file path, or a `sqlite:///` URL
    pub database: Option<String>,
    /// `pretty`, `json` or `off`
    pub log_format: Option<String>,
}

impl Config {
    /// Resolve the configuration for this process
    pub fn load(db: Option<PathBuf>, log_format: Option<String>) -> Result<Self, ExError> {
        let mut config = Self::from_file(Path::new(CONFIG_FILE_PATH))?.unwrap_or_default();
        config.merge_env(|key| std::env::var(key).ok());
        config.merge_flags(db, log_format);
        Ok(config)
    }

    /// Parse a TOML config file; `None` when it does not exist
    pub fn from_file(path: &Path) -> Result<Option<Self>, ExError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_message(format!("{}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map(Some).map_err(|e| {
            ExError::new(ExErrorKind::Configuration)
                .with_op("load_config")
                .with_message(format!("{}: {}", path.display(), e))
        })
    }

    fn merge_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(database) = lookup(ENV_DATABASE).filter(|v| !v.trim().is_empty()) {
            self.database = Some(database);
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT).filter(|v| !v.trim().is_empty()) {
            self.log_format = Some(format);
        }
    }

    fn merge_flags(&mut self, db: Option<PathBuf>, log_format: Option<String>) {
        if let Some(db) = db {
            self.database = Some(db.to_string_lossy().into_owned());
        }
        if log_format.is_some() {
            self.log_format = log_format;
        }
    }

    /// Database file to open
    pub fn database_path(&self) -> PathBuf {
        match self.database.as_deref() {
            Some(value) => {
                PathBuf::from(value.strip_prefix(SQLITE_URL_PREFIX).unwrap_or(value))
            }
            None => PathBuf::from(DEFAULT_DB_PATH),
        }
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.database_path())
    }

    /// Logging profile; logging is off unless a format is configured
    pub fn log_profile(&self) -> Result<Profile, ExError> {
        match self.log_format.as_deref() {
            None => Ok(Profile::Test),
            Some(format) => format.parse().map_err(|reason: String| {
                ExError::new(ExErrorKind::Configuration)
                    .with_op("load_config")
                    .with_message(reason)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database_path(), PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(config.log_profile().unwrap(), Profile::Test);
    }

    #[test]
    fn test_sqlite_url_prefix_is_accepted() {
        let mut config = Config::default();
        config.merge_env(env(&[(ENV_DATABASE, "sqlite:///todo.db")]));
        assert_eq!(config.database_path(), PathBuf::from("todo.db"));

        config.merge_env(env(&[(ENV_DATABASE, "sqlite:////var/lib/todo.db")]));
        assert_eq!(config.database_path(), PathBuf::from("/var/lib/todo.db"));
    }

    #[test]
    fn test_precedence_file_then_env_then_flags() {
        let mut config: Config =
            toml::from_str("database = \"file.db\"\nlog_format = \"json\"\n").unwrap();

        config.merge_env(env(&[(ENV_DATABASE, "env.db")]));
        assert_eq!(config.database_path(), PathBuf::from("env.db"));
        assert_eq!(config.log_profile().unwrap(), Profile::Production);

        config.merge_flags(Some(PathBuf::from("flag.db")), Some("pretty".to_string()));
        assert_eq!(config.database_path(), PathBuf::from("flag.db"));
        assert_eq!(config.log_profile().unwrap(), Profile::Development);
    }

    #[test]
    fn test_unknown_log_format_is_a_configuration_error() {
        let config = Config {
            log_format: Some("xml".to_string()),
            ..Config::default()
        };
        assert_eq!(config.log_profile().unwrap_err().kind(), ExErrorKind::Configuration);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_PATH);
        assert_eq!(Config::from_file(&path).unwrap(), None);

        std::fs::write(&path, "database = \"lists.db\"\n").unwrap();
        let config = Config::from_file(&path).unwrap().unwrap();
        assert_eq!(config.database.as_deref(), Some("lists.db"));

        std::fs::write(&path, "database = [").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
