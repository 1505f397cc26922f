use config::{Config, Environment, File};
use patternbook_error::{ensure, ConfigError};
use serde::{Deserialize, Serialize};

use super::ConfigDefaults;
use crate::logging::LoggingConfig;

/// Имя необязательного файла настроек в рабочем каталоге (без расширения).
pub const SETTINGS_FILE: &str = "patternbook";
/// Префикс переменных окружения.
pub const ENV_PREFIX: &str = "PATTERNBOOK";

/// Настройки приложения.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Заголовок, который выводится на поверхность отображения.
    pub heading: String,
    /// Дефолты для синглтона конфигурации.
    pub defaults: ConfigDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Собирает настройки: дефолты, затем `patternbook.toml` (если есть),
    /// затем переменные окружения `PATTERNBOOK_*`
    /// (`PATTERNBOOK_LOGGING__LEVEL=debug`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Some(SETTINGS_FILE))
    }

    /// То же, что [`load`](Self::load), но с явным путём к файлу (или без
    /// файла).
    pub fn load_from(file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Adding default values
            .set_default("heading", "JS Starter")
            .and_then(|b| b.set_default("defaults.number", 5))
            .and_then(|b| b.set_default("defaults.size", 10))
            .map_err(load_error)?;

        if let Some(path) = file {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        let cfg = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(load_error)?;

        let settings: Settings = cfg.try_deserialize().map_err(load_error)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure!(
            !self.heading.trim().is_empty(),
            ConfigError::InvalidValue {
                field: "heading".into(),
                reason: "heading cannot be empty".into(),
            }
        );
        self.logging.validate()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            heading: "JS Starter".to_string(),
            defaults: ConfigDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn load_error(err: config::ConfigError) -> ConfigError {
    ConfigError::Load {
        reason: err.to_string(),
    }
}
