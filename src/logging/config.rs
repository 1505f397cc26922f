use std::{fs, io, path::PathBuf};

use patternbook_error::{ensure, ConfigError};
use serde::{Deserialize, Serialize};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Формат вывода логов.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Настройки консольного вывода.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub with_ansi: bool,
    pub with_target: bool,
    pub with_thread_ids: bool,
    pub with_line_numbers: bool,
}

/// Настройки файлового вывода (ежедневная ротация).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FileConfig {
    pub enabled: bool,
    pub directory: PathBuf,
    pub filename: String,
}

/// Конфигурация логирования (секция `logging` в настройках).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень: trace, debug, info, warn, error
    pub level: String,
    pub format: LogFormat,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            with_ansi: true,
            with_target: true,
            with_thread_ids: false,
            with_line_numbers: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: PathBuf::from("logs"),
            filename: "patternbook.log".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl LoggingConfig {
    /// Проверяет уровень и имя файла.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_ascii_lowercase();
        ensure!(
            LEVELS.contains(&level.as_str()),
            ConfigError::InvalidValue {
                field: "logging.level".into(),
                reason: format!("unknown level '{}'", self.level),
            }
        );
        ensure!(
            !self.file.enabled || !self.file.filename.trim().is_empty(),
            ConfigError::InvalidValue {
                field: "logging.file.filename".into(),
                reason: "filename cannot be empty".into(),
            }
        );
        Ok(())
    }

    /// Создаёт каталог для файловых логов, если файловый вывод включён.
    pub fn ensure_log_dir(&self) -> io::Result<()> {
        if self.file.enabled {
            fs::create_dir_all(&self.file.directory)?;
        }
        Ok(())
    }

    /// Директива для `EnvFilter`: уровень для всего процесса.
    pub fn build_filter_directive(&self) -> String {
        self.level.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = LoggingConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.build_filter_directive(), "info");
        assert!(!cfg.file.enabled);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let cfg = LoggingConfig {
            level: "loud".into(),
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "logging.level"
        ));
    }

    /// Пустое имя файла проверяется только при включённом файловом выводе.
    #[test]
    fn test_empty_filename_only_matters_when_enabled() {
        let mut cfg = LoggingConfig::default();
        cfg.file.filename = " ".into();
        assert!(cfg.validate().is_ok());

        cfg.file.enabled = true;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "logging.file.filename"
        ));
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let cfg = LoggingConfig {
            level: "WARN".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.build_filter_directive(), "warn");
    }

    #[test]
    fn test_ensure_log_dir_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        let mut cfg = LoggingConfig::default();
        cfg.file.enabled = true;
        cfg.file.directory = dir.clone();

        cfg.ensure_log_dir().unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }
}
